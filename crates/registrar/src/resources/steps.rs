//! Registration wizard step template
//!
//! Currently used for both sole proprietorships and general partnerships.

use serde::Serialize;

/// Router target of a wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum RouteName {
    RegistrationDefineBusiness,
    RegistrationPeopleRoles,
    RegistrationReviewConfirm,
}

impl RouteName {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteName::RegistrationDefineBusiness => "registration-define-business",
            RouteName::RegistrationPeopleRoles => "registration-people-roles",
            RouteName::RegistrationReviewConfirm => "registration-review-confirm",
        }
    }
}

impl From<RouteName> for &'static str {
    fn from(route: RouteName) -> Self {
        route.as_str()
    }
}

/// View component rendered for a wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum ViewComponentName {
    RegistrationDefineBusiness,
    RegistrationPeopleRoles,
    RegistrationReviewConfirm,
}

impl ViewComponentName {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewComponentName::RegistrationDefineBusiness => "RegistrationDefineBusiness",
            ViewComponentName::RegistrationPeopleRoles => "RegistrationPeopleRoles",
            ViewComponentName::RegistrationReviewConfirm => "RegistrationReviewConfirm",
        }
    }
}

impl From<ViewComponentName> for &'static str {
    fn from(component: ViewComponentName) -> Self {
        component.as_str()
    }
}

/// One button in the wizard's step bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepTemplate {
    pub id: &'static str,
    pub step: u8,
    pub icon: &'static str,
    pub text: &'static str,
    #[serde(rename = "to")]
    pub route: RouteName,
    pub component: ViewComponentName,
}

pub static REGISTRATION_STEPS: [StepTemplate; 3] = [
    StepTemplate {
        id: "step-1-btn",
        step: 1,
        icon: "mdi-domain",
        text: "Define Your \nBusiness",
        route: RouteName::RegistrationDefineBusiness,
        component: ViewComponentName::RegistrationDefineBusiness,
    },
    StepTemplate {
        id: "step-2-btn",
        step: 2,
        icon: "mdi-handshake",
        text: "Add People \nand Roles",
        route: RouteName::RegistrationPeopleRoles,
        component: ViewComponentName::RegistrationPeopleRoles,
    },
    StepTemplate {
        id: "step-3-btn",
        step: 3,
        icon: "mdi-text-box-check-outline",
        text: "Review\nand Confirm",
        route: RouteName::RegistrationReviewConfirm,
        component: ViewComponentName::RegistrationReviewConfirm,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_numbered_in_order() {
        let numbers: Vec<u8> = REGISTRATION_STEPS.iter().map(|s| s.step).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        for step in &REGISTRATION_STEPS {
            assert_eq!(step.id, format!("step-{}-btn", step.step));
        }
    }

    #[test]
    fn test_serializes_route_as_to() {
        let value = serde_json::to_value(REGISTRATION_STEPS[0]).unwrap();
        assert_eq!(value["to"], "registration-define-business");
        assert_eq!(value["component"], "RegistrationDefineBusiness");
        assert_eq!(value["text"], "Define Your \nBusiness");
    }
}
