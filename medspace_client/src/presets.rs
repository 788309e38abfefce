/// The "quick inquiry" options offered by the contact form. Selecting one
/// pre-fills the message field with its canned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickInquiry {
    TalkToAdvisor,
    CustomPlan,
    GrowthVsPremium,
    SeoRecallAutomation,
    StarterPlan,
}

impl QuickInquiry {
    pub const ALL: [Self; 5] = [
        Self::TalkToAdvisor,
        Self::CustomPlan,
        Self::GrowthVsPremium,
        Self::SeoRecallAutomation,
        Self::StarterPlan,
    ];

    pub fn message(self) -> &'static str {
        match self {
            Self::TalkToAdvisor => "I'd like to talk to an advisor.",
            Self::CustomPlan => "I need a custom plan (e.g., more days, multiple clinics).",
            Self::GrowthVsPremium => {
                "What's the main difference between the 'Growth' and 'Premium' plans?"
            }
            Self::SeoRecallAutomation => {
                "Can you explain the 'SEO + Recall Automation' feature?"
            }
            Self::StarterPlan => "I have a question about the 'Starter' plan.",
        }
    }
}
