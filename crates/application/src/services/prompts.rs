//! RegBot prompt texts - welcomes, sample prompts and prompt composition

use domain::{BusinessProfile, IndustrySector, OnboardingStep};

/// Sample prompts offered on the dashboard
pub const DASHBOARD_SAMPLE_LIMIT: usize = 6;

pub const DASHBOARD_WELCOME: &str = "Hi! I'm RegBot. Ask me anything about your compliance \
                                     tasks, legal updates, or general business regulations in \
                                     Australia.";

pub const ONBOARDING_APOLOGY: &str = "Sorry, I'm having trouble right now. Please try again or \
                                      continue with the form manually.";

pub const DASHBOARD_APOLOGY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// Language tag used for speech recognition
pub const SPEECH_LANGUAGE: &str = "en-AU";

pub const fn onboarding_welcome(step: OnboardingStep) -> &'static str {
    match step {
        OnboardingStep::Business => {
            "👋 Hi! I'm RegBot. I can help you describe your business or choose the right industry."
        },
        OnboardingStep::Location => {
            "📍 Need help with your location? I can help you find your postcode, state, or local \
             council."
        },
        OnboardingStep::Structure => {
            "🏢 Confused about business structures? I'll explain in simple terms!"
        },
        OnboardingStep::Financials => {
            "💰 Not sure about your business size? I can help you estimate employee counts or \
             annual turnover."
        },
        OnboardingStep::Activities => {
            "✅ Need help identifying your business activities? Describe what you do and I'll \
             suggest which areas might apply."
        },
    }
}

pub const fn onboarding_samples(step: OnboardingStep) -> [&'static str; 3] {
    match step {
        OnboardingStep::Business => [
            "I am running an auto repair shop, what industry am I?",
            "What's a good business name for my cafe?",
            "I fix cars and sell parts, what category?",
        ],
        OnboardingStep::Location => [
            "What's the postcode for Sydney CBD?",
            "Which local council covers Melbourne?",
            "What state regulations apply in Brisbane?",
        ],
        OnboardingStep::Structure => [
            "What's a sole trader?",
            "Should I be a company or sole trader?",
            "What's the difference between company and partnership?",
        ],
        OnboardingStep::Financials => [
            "I'm just starting, what's my turnover?",
            "How many employees is 'small business'?",
            "What size category for 5 staff?",
        ],
        OnboardingStep::Activities => [
            "I handle food, what activities apply?",
            "I collect customer emails, what do I need?",
            "I work with cars, what regulations?",
        ],
    }
}

/// Industry prompts; sectors without their own list use the retail one
const fn industry_samples(sector: Option<IndustrySector>) -> [&'static str; 3] {
    match sector {
        Some(IndustrySector::Hospitality) => [
            "What food safety licenses do I need?",
            "Do I need liquor licensing?",
            "What are my workplace safety requirements?",
        ],
        Some(IndustrySector::Construction) => [
            "What building licenses do I need?",
            "Do I need WorkCover insurance?",
            "What safety certifications are required?",
        ],
        Some(IndustrySector::Automotive) => [
            "What permits do I need for auto repairs?",
            "Do I need environmental waste permits?",
            "What workplace safety rules apply to mechanics?",
        ],
        Some(IndustrySector::Healthcare) => [
            "What health practitioner licenses do I need?",
            "Do I need privacy compliance for patient data?",
            "What are my professional indemnity requirements?",
        ],
        Some(IndustrySector::Technology) => [
            "Do I need privacy compliance for customer data?",
            "What are my cybersecurity obligations?",
            "Do I need software licensing compliance?",
        ],
        _ => [
            "What permits do I need for selling products?",
            "Do I need consumer law compliance?",
            "What are my product safety requirements?",
        ],
    }
}

/// Profile-derived prompts for the dashboard assistant
pub fn dashboard_samples(profile: Option<&BusinessProfile>) -> Vec<String> {
    let name = profile.map_or("my business", BusinessProfile::display_name);
    let state = profile
        .and_then(|p| p.location.state)
        .map_or("NSW", |s| s.code());
    let sector = profile.and_then(|p| p.industry_sector);

    let base = [
        format!("I am running {name}, what compliance do I need?"),
        format!("What are my main risks in {state}?"),
        "What's an ABN and do I need one?".to_string(),
        "Explain GST registration in simple terms".to_string(),
    ];

    base.into_iter()
        .chain(industry_samples(sector).map(str::to_string))
        .take(DASHBOARD_SAMPLE_LIMIT)
        .collect()
}

/// Prompt for the onboarding assistant
///
/// The form is serialised as-is so the assistant sees every field,
/// including empty ones.
pub fn onboarding_prompt(form: &BusinessProfile, step: OnboardingStep, message: &str) -> String {
    let form_json = serde_json::to_string(form).unwrap_or_else(|_| "{}".to_string());
    format!(
        "You are RegBot, a helpful AI assistant for Australian business registration.\n\
         Be conversational, friendly, and use simple language. Keep responses concise but \
         helpful.\n\
         Current user context: {form_json}\n\
         Current step: {step}\n\
         \n\
         Guidelines:\n\
         - For business descriptions: Help classify to ANZSIC codes and suggest industry sectors\n\
         - For business types: Explain in plain language with pros/cons\n\
         - For locations: Help with postcodes, states, councils\n\
         - Always ask if they want you to fill in the form for them\n\
         - Use Australian terminology and examples\n\
         - If unsure, ask clarifying questions\n\
         \n\
         User question: \"{message}\"\n\
         \n\
         If you can suggest specific values for their form (like industry sector, business \
         structure, etc.), end your response with: SUGGESTION: field_name=\"value\"\n\
         \n\
         For example: SUGGESTION: industry_sector=\"retail\" or SUGGESTION: \
         business_structure=\"sole_trader\"",
        step = step.key(),
    )
}

/// Prompt for the dashboard assistant
pub fn dashboard_prompt(profile: Option<&BusinessProfile>, message: &str) -> String {
    let profile_json = profile
        .and_then(|p| serde_json::to_string(p).ok())
        .unwrap_or_else(|| "null".to_string());
    format!(
        "You are RegBot, a helpful AI assistant for Australian business compliance.\n\
         You are in a chat on the main dashboard. Be conversational, friendly, and use simple \
         language. Keep responses concise but helpful.\n\
         \n\
         The user's business profile is: {profile_json}.\n\
         Use this profile to provide personalized and contextual advice.\n\
         \n\
         Guidelines:\n\
         - Explain compliance terms (like ABN, GST, TFN) in plain language.\n\
         - Suggest actions based on the user's profile (industry, location, structure).\n\
         - Highlight potential regulatory conflicts or overlaps (e.g., federal vs. state).\n\
         - Use Australian terminology and examples.\n\
         - If you provide a link, make sure it is a valid, real government URL.\n\
         - If unsure, ask clarifying questions.\n\
         \n\
         User question: \"{message}\""
    )
}

/// Question put to the user before an assistant suggestion is applied
pub fn confirmation_question(field: &str, value: &str) -> String {
    format!("Would you like me to fill in \"{field}\" with \"{value}\"?")
}
