//! The wizard state machine, kept free of any browser types so the
//! transition rules can be checked in isolation.

/// The four wizard stages. Forward transitions only; the single way back
/// is a full reset to `Create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStage {
    Create,
    Verify,
    Launch,
    Success,
}

impl WizardStage {
    /// Verify, Launch and Success all operate on a registered agent.
    pub fn requires_agent(self) -> bool {
        !matches!(self, WizardStage::Create)
    }

    /// A stage is only presentable when its prerequisites are in memory:
    /// an agent past Create, and a launch result on Success.
    pub fn is_presentable(self, has_agent: bool, has_result: bool) -> bool {
        if self.requires_agent() && !has_agent {
            return false;
        }
        self != WizardStage::Success || has_result
    }
}

/// Turn a launch failure into the banner text. Prefers the typed error
/// slug from the server; falls back to the substring heuristic when the
/// slug is absent (the upstream error contract is prose-only).
pub fn describe_launch_failure(kind: Option<&str>, message: &str) -> String {
    let unverified = kind == Some("agent_unverified")
        || (kind.is_none() && is_unverified_hint(message));
    if unverified {
        return "\u{26A0}\u{FE0F} Agent not verified! Please complete Twitter verification first."
            .to_string();
    }
    if message.is_empty() {
        "Token launch failed".to_string()
    } else {
        message.to_string()
    }
}

fn is_unverified_hint(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("claimed") || lower.contains("human")
}
