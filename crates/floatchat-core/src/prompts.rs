/// A "Try asking about" hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedPrompt {
    pub label: &'static str,
    pub question: &'static str,
}

pub static SUGGESTED_PROMPTS: [SuggestedPrompt; 9] = [
    SuggestedPrompt {
        label: "Ocean Heat Wave Alert",
        question: "Is there an ocean heat wave alert in the current ARGO data?",
    },
    SuggestedPrompt {
        label: "Salinity Anomaly",
        question: "Are there any recent salinity anomalies detected in the ocean?",
    },
    SuggestedPrompt {
        label: "Deep Water Formation",
        question: "What are the latest observations on deep water formation?",
    },
    SuggestedPrompt {
        label: "Corals Bleaching",
        question: "Is there any coral bleaching event detected in the ocean data?",
    },
    SuggestedPrompt {
        label: "Ocean Currents for Ships/Navigation",
        question: "How can ocean currents help ships find the best sea route right now?",
    },
    SuggestedPrompt {
        label: "Ocean Waves",
        question: "What is the current ocean wave activity in the North Pacific?",
    },
    SuggestedPrompt {
        label: "Policy Making (Wildlife, Environment)",
        question: "How can ocean data support policy making for wildlife and the environment?",
    },
    SuggestedPrompt {
        label: "Studying Biolife & Danger Alerts",
        question: "What does the data say about marine biolife, fisheries, and danger alerts under the ocean?",
    },
    SuggestedPrompt {
        label: "Tsunami Alert",
        question: "Is there any tsunami alert or warning in the latest ocean data?",
    },
];

/// Look up a hint by its 1-based position in the list
#[must_use]
pub fn suggested_prompt(number: usize) -> Option<&'static SuggestedPrompt> {
    number
        .checked_sub(1)
        .and_then(|index| SUGGESTED_PROMPTS.get(index))
}
