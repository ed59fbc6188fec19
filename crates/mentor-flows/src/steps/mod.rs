pub mod login;
pub mod partner_registration;
pub mod profile_setting;

use mentor_core::{StepContent, StepDefinition};
use serde::{Deserialize, Serialize};

use self::login::LoginStep;
use self::partner_registration::PartnerRegistrationStep;
use self::profile_setting::ProfileSettingStep;

/// Flujos disponibles en la app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    Login,
    PartnerRegistration,
    ProfileSetting,
}

impl FlowKind {
    pub const ALL: [FlowKind; 3] = [FlowKind::Login, FlowKind::PartnerRegistration, FlowKind::ProfileSetting];

    pub fn name(self) -> &'static str {
        match self {
            FlowKind::Login => "login",
            FlowKind::PartnerRegistration => "partner_registration",
            FlowKind::ProfileSetting => "profile_setting",
        }
    }

    /// Acepta el nombre canónico y alias cortos (`partner`, `profile`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "login" => Some(FlowKind::Login),
            "partner_registration" | "partner" => Some(FlowKind::PartnerRegistration),
            "profile_setting" | "profile" => Some(FlowKind::ProfileSetting),
            _ => None,
        }
    }

    /// Steps del flujo como valores planos, en orden.
    pub fn definitions(self) -> Vec<StepDefinition> {
        match self {
            FlowKind::Login => to_definitions(LoginStep::ALL),
            FlowKind::PartnerRegistration => to_definitions(PartnerRegistrationStep::ALL),
            FlowKind::ProfileSetting => to_definitions(ProfileSettingStep::ALL),
        }
    }
}

fn to_definitions<S: StepContent>(steps: &[S]) -> Vec<StepDefinition> {
    steps.iter()
         .map(|s| StepDefinition::new(s.main_title(), s.sub_title(), s.action_label()))
         .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in FlowKind::ALL {
            assert_eq!(FlowKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(FlowKind::from_name("Partner"), Some(FlowKind::PartnerRegistration));
        assert_eq!(FlowKind::from_name("profile-setting"), Some(FlowKind::ProfileSetting));
        assert_eq!(FlowKind::from_name("checkout"), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&FlowKind::PartnerRegistration).unwrap();
        assert_eq!(json, "\"partner_registration\"");
        let back: FlowKind = serde_json::from_str("\"profile_setting\"").unwrap();
        assert_eq!(back, FlowKind::ProfileSetting);
    }

    #[test]
    fn every_flow_has_steps() {
        for kind in FlowKind::ALL {
            let defs = kind.definitions();
            assert!(!defs.is_empty(), "{}", kind.name());
            assert!(defs.iter().all(|d| !d.action_label.is_empty()));
        }
    }
}
