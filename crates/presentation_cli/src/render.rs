//! Plain-text rendering of pages
//!
//! Every function returns the text to print so output can be tested.

use application::{
    DashboardData, OnboardingSession, SessionContext, TaskBoard, TaskFocus, UpdateFeed,
    UpdateFilter,
};
use chrono::NaiveDate;
use domain::{
    AustralianState, BusinessActivity, BusinessProfile, BusinessStructure, ChatMessage,
    ComplianceItem, LegalUpdate, MessageKind, STEP_COUNT, SuburbInput, TaskStatus, WarningItem,
};

const PROGRESS_BAR_WIDTH: usize = 20;

fn progress_bar(percentage: u8) -> String {
    let filled = usize::from(percentage.min(100)) * PROGRESS_BAR_WIDTH / 100;
    format!(
        "[{}{}] {percentage}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

const fn status_marker(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "[x]",
        TaskStatus::InProgress => "[~]",
        TaskStatus::Pending => "[ ]",
    }
}

fn item_line(item: &ComplianceItem) -> String {
    format!(
        "{} {} ({}, {}) [{}]",
        status_marker(item.status),
        item.title,
        item.priority,
        item.jurisdiction,
        item.id
    )
}

fn update_line(update: &LegalUpdate) -> String {
    let mut line = format!("[{}] {}", update.urgency, update.title);
    if let Some(date) = update.effective_date {
        line.push_str(&format!(" - effective {date}"));
    }
    if update.action_required {
        line.push_str(" - action required");
    }
    line
}

fn warning_line(warning: &WarningItem) -> String {
    format!("({} risk) {}: {}", warning.risk_level, warning.title, warning.description)
}

pub fn dashboard(context: &SessionContext, data: &DashboardData) -> String {
    let summary = data.summary();
    let name = context.profile().map_or("your business", BusinessProfile::display_name);

    let mut out = format!("G'day {}! Compliance for {name}\n\n", context.user().greeting_name());
    out.push_str(&format!("Progress  {}\n", progress_bar(summary.progress_percentage)));
    out.push_str(&format!(
        "          {} of {} tasks completed, {} in progress\n",
        summary.counts.completed, summary.total, summary.counts.in_progress
    ));
    out.push_str(&format!(
        "Priority  {} critical, {} high\n",
        summary.counts.critical, summary.counts.high
    ));

    if let Some(urgent) = summary.urgent_item {
        out.push_str(&format!("\nUrgent action: {}\n", urgent.title));
        if let Some(link) = urgent.resolved_link() {
            out.push_str(&format!("  {link}\n"));
        }
    }

    if !summary.checkpoints.is_empty() {
        out.push_str("\nRoadmap\n");
        for (n, item) in summary.checkpoints.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", n + 1, item_line(item)));
        }
    }

    out.push_str("\nRecent updates\n");
    if data.recent_updates().is_empty() {
        out.push_str("  No recent updates\n");
    }
    for update in data.recent_updates() {
        out.push_str(&format!("  {}\n", update_line(update)));
    }

    out.push_str("\nThings to avoid\n");
    if data.warnings_tile().is_empty() {
        out.push_str("  No specific warnings identified yet\n");
    }
    for warning in data.warnings_tile() {
        out.push_str(&format!("  {}\n", warning_line(warning)));
    }
    out
}

pub fn task_board(
    board: &TaskBoard,
    focus: Option<TaskFocus>,
    state: Option<AustralianState>,
) -> String {
    let counts = board.tab_counts();
    let mut out = format!(
        "All {} | Critical {} | Pending {} | Completed {}\n",
        counts.all, counts.critical, counts.pending, counts.completed
    );
    out.push_str(&format!("Progress {}\n\n", progress_bar(board.progress_percentage())));

    let items = board.filtered();
    if items.is_empty() {
        out.push_str("No tasks match this filter\n");
    }
    for (position, item) in items.iter().enumerate() {
        let highlighted = focus.is_some_and(|f| f.position == position);
        let pointer = if highlighted { ">>" } else { "  " };
        out.push_str(&format!("{pointer} {}\n", item_line(item)));
        if !item.description.is_empty() {
            out.push_str(&format!("      {}\n", item.description));
        }
        if let Some(state) = state
            && !item.is_completed()
            && application::is_state_relevant(item, Some(state))
        {
            out.push_str(&format!("      Applies in {state}\n"));
        }
        if let Some(cost) = &item.cost_estimate {
            out.push_str(&format!("      Cost: {cost}\n"));
        }
        if let Some(link) = item.resolved_link() {
            out.push_str(&format!("      {link}\n"));
        }
    }
    out
}

pub fn update_feed(
    feed: &UpdateFeed,
    filter: UpdateFilter,
    today: NaiveDate,
    state: Option<AustralianState>,
) -> String {
    let counts = feed.counts();
    let mut out = format!(
        "All {} | Urgent {} | Action required {}\n\n",
        counts.all, counts.urgent, counts.action_required
    );

    let updates = feed.filtered(filter, today);
    if updates.is_empty() {
        out.push_str("No updates match this filter\n");
    }
    for update in updates {
        let relevant = if UpdateFeed::is_relevant(update, state) { " *" } else { "" };
        out.push_str(&format!("{}{relevant}\n", update_line(update)));
        if !update.description.is_empty() {
            out.push_str(&format!("    {}\n", update.description));
        }
        if !update.affected_jurisdictions.is_empty() {
            out.push_str(&format!(
                "    Jurisdictions: {}\n",
                update.affected_jurisdictions.join(", ")
            ));
        }
        if let Some(url) = &update.source_url {
            out.push_str(&format!("    {url}\n"));
        }
    }
    if state.is_some() {
        out.push_str("\n* affects your state\n");
    }
    out
}

fn or_dash<T>(value: Option<T>, label: impl Fn(T) -> &'static str) -> &'static str {
    value.map_or("-", label)
}

pub fn profile(profile: &BusinessProfile) -> String {
    let location = &profile.location;
    let mut out = format!("{}\n", profile.display_name());
    out.push_str(&format!(
        "  Structure:  {}\n",
        or_dash(profile.business_structure, |s| s.label())
    ));
    out.push_str(&format!(
        "  Industry:   {}\n",
        or_dash(profile.industry_sector, |s| s.label())
    ));
    out.push_str(&format!(
        "  Address:    {}, {} {} {}\n",
        location.street_address,
        location.suburb,
        or_dash(location.state, |s| s.code()),
        location.postcode
    ));
    out.push_str(&format!("  Council:    {}\n", location.council));
    out.push_str(&format!(
        "  Employees:  {}\n",
        or_dash(profile.employee_count, |c| c.label())
    ));
    out.push_str(&format!(
        "  Turnover:   {}\n",
        or_dash(profile.annual_turnover, |t| t.label())
    ));
    let activities: Vec<&str> = profile
        .business_activities
        .iter()
        .map(BusinessActivity::label)
        .collect();
    out.push_str(&format!(
        "  Activities: {}\n",
        if activities.is_empty() { "-".to_string() } else { activities.join(", ") }
    ));
    out.push_str(&format!(
        "  Onboarding: {}\n",
        if profile.onboarding_completed { "completed" } else { "not completed" }
    ));
    out
}

pub fn onboarding(session: &OnboardingSession) -> String {
    let form = session.form();
    let step = form.step();
    let mut out = format!("Step {} of {STEP_COUNT}: {}\n", step.number(), step.title());
    out.push_str(&profile(form.data()));

    if let SuburbInput::Select(suburbs) = form.suburb_input() {
        let names: Vec<String> = suburbs
            .iter()
            .map(|s| format!("{} ({})", s.name, s.postcode))
            .collect();
        out.push_str(&format!("  Suburbs:    {}\n", names.join(", ")));
    }
    out
}

pub fn structure_help(structure: BusinessStructure) -> String {
    let help = structure.help();
    let mut out = format!("{}\n  {}\n", help.title, help.description);
    out.push_str(&format!("  Example: {}\n", help.example));
    out.push_str(&format!("  Why choose it: {}\n", help.why_choose));
    for pro in help.pros {
        out.push_str(&format!("  + {pro}\n"));
    }
    for con in help.cons {
        out.push_str(&format!("  - {con}\n"));
    }
    out
}

pub fn chat_message(message: &ChatMessage) -> String {
    match message.kind {
        MessageKind::Bot => format!("RegBot: {}", message.text),
        MessageKind::User => format!("You: {}", message.text),
    }
}

pub fn sample_prompts(prompts: &[String]) -> String {
    let mut out = String::from("Try asking:\n");
    for (n, prompt) in prompts.iter().enumerate() {
        out.push_str(&format!("  {}. {prompt}\n", n + 1));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use domain::{CurrentUser, EmailAddress, Priority, RecordId, RiskLevel, Urgency};
    use infrastructure::InMemoryEntityGateway;

    use super::*;

    fn items() -> Vec<ComplianceItem> {
        vec![
            ComplianceItem::new("abn", "Apply for an ABN", Priority::Critical),
            ComplianceItem::new("gst", "Register for GST", Priority::High)
                .with_status(TaskStatus::Completed),
        ]
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0), format!("[{}] 0%", "-".repeat(20)));
        assert_eq!(progress_bar(50), format!("[{}{}] 50%", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "#".repeat(20)));
    }

    #[test]
    fn dashboard_shows_urgent_item_with_abn_link() {
        let user = CurrentUser::new(EmailAddress::new("sam@example.com").unwrap());
        let context = SessionContext::new(user, None);
        let data = DashboardData {
            items: items(),
            updates: Vec::new(),
            warnings: vec![WarningItem {
                id: RecordId::from("w1"),
                title: "Cash jobs".to_string(),
                description: "Record them".to_string(),
                risk_level: RiskLevel::High,
                details_link: None,
            }],
        };

        let text = dashboard(&context, &data);
        assert!(text.starts_with("G'day sam!"));
        assert!(text.contains("1 of 2 tasks completed"));
        assert!(text.contains("Urgent action: Apply for an ABN"));
        assert!(text.contains(domain::ABN_APPLICATION_URL));
        assert!(text.contains("No recent updates"));
        assert!(text.contains("Cash jobs"));
    }

    #[test]
    fn task_board_marks_focus() {
        let gateway = Arc::new(InMemoryEntityGateway::<ComplianceItem>::new());
        let board = TaskBoard::with_items(gateway, items());
        let focus = board.focus(&RecordId::from("gst"));

        let text = task_board(&board, focus, None);
        assert!(text.contains(">> [x] Register for GST"));
        assert!(text.contains("   [ ] Apply for an ABN"));
        assert!(text.contains("Critical 1 | Pending 1 | Completed 1"));
    }

    #[test]
    fn update_feed_flags_state_relevance() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let feed = UpdateFeed::new(vec![LegalUpdate {
            id: RecordId::from("u1"),
            title: "Payday super".to_string(),
            description: String::new(),
            urgency: Urgency::Critical,
            category: None,
            effective_date: NaiveDate::from_ymd_opt(2026, 10, 30),
            action_required: true,
            affected_jurisdictions: vec!["NT".to_string()],
            affected_industries: Vec::new(),
            source_url: None,
        }]);

        let text = update_feed(&feed, UpdateFilter::Upcoming, today, Some(AustralianState::Nt));
        assert!(text.contains("Payday super - effective 2026-10-30 - action required *"));

        let none = update_feed(&feed, UpdateFilter::Urgency(Urgency::Low), today, None);
        assert!(none.contains("No updates match this filter"));
    }

    #[test]
    fn empty_profile_uses_placeholders() {
        let text = profile(&BusinessProfile::default());
        assert!(text.starts_with("my business\n"));
        assert!(text.contains("Structure:  -"));
        assert!(text.contains("Onboarding: not completed"));
    }

    #[test]
    fn structure_help_lists_pros_and_cons() {
        let text = structure_help(BusinessStructure::SoleTrader);
        assert_eq!(text.matches("\n  + ").count(), 3);
        assert_eq!(text.matches("\n  - ").count(), 3);
    }

    #[test]
    fn chat_lines_name_the_speaker() {
        assert_eq!(chat_message(&ChatMessage::bot("Hi")), "RegBot: Hi");
        assert_eq!(chat_message(&ChatMessage::user("Yo")), "You: Yo");
    }
}
