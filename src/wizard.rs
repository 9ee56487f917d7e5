//! State machine behind the "find your plan" quiz.
//!
//! Two fixed questions lead to a recommendation. The machine only moves
//! forward on a matching answer and "start over" always lands back on the
//! first question with nothing remembered.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum VehicleType {
    PrivateVehicle,
    BusinessFleet,
    Motorbike,
    Taxi,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::PrivateVehicle,
        VehicleType::BusinessFleet,
        VehicleType::Motorbike,
        VehicleType::Taxi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VehicleType::PrivateVehicle => "Private Vehicle",
            VehicleType::BusinessFleet => "Business Fleet",
            VehicleType::Motorbike => "Motorbike",
            VehicleType::Taxi => "Taxi",
        }
    }

    pub fn icon(self) -> (&'static str, &'static str) {
        match self {
            VehicleType::PrivateVehicle => ("🚗", "#4ade80"),
            VehicleType::BusinessFleet => ("🚚", "#60a5fa"),
            VehicleType::Motorbike => ("🏍️", "#fbbf24"),
            VehicleType::Taxi => ("🚕", "#f87171"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Priority {
    LowestPrice,
    FireAndTheft,
    ComprehensiveProtection,
    QuickApproval,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::LowestPrice,
        Priority::FireAndTheft,
        Priority::ComprehensiveProtection,
        Priority::QuickApproval,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Priority::LowestPrice => "Lowest Price",
            Priority::FireAndTheft => "Fire & Theft Cover",
            Priority::ComprehensiveProtection => "Comprehensive Protection",
            Priority::QuickApproval => "Quick Approval",
        }
    }

    pub fn icon(self) -> (&'static str, &'static str) {
        match self {
            Priority::LowestPrice => ("🔥", "#facc15"),
            Priority::FireAndTheft => ("🔥", "#f97316"),
            Priority::ComprehensiveProtection => ("🛡️", "#34d399"),
            Priority::QuickApproval => ("✅", "#22d3ee"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    Basic,
    Standard,
    Comprehensive,
}

impl Recommendation {
    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::LowestPrice => Recommendation::Basic,
            Priority::ComprehensiveProtection => Recommendation::Comprehensive,
            _ => Recommendation::Standard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Recommendation::Basic => "Basic",
            Recommendation::Standard => "Standard",
            Recommendation::Comprehensive => "Comprehensive",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    VehicleType,
    Priority,
    Result,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::VehicleType => 1,
            Step::Priority => 2,
            Step::Result => 3,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WizardAnswers {
    pub vehicle_type: Option<VehicleType>,
    pub priority: Option<Priority>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    step: Step,
    answers: WizardAnswers,
    recommendation: Option<Recommendation>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            step: Step::VehicleType,
            answers: WizardAnswers::default(),
            recommendation: None,
        }
    }
}

impl Wizard {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &WizardAnswers {
        &self.answers
    }

    pub fn recommendation(&self) -> Option<Recommendation> {
        self.recommendation
    }

    /// Returns the next state; an answer for another step leaves it unchanged.
    pub fn choose_vehicle(&self, vehicle: VehicleType) -> Self {
        if self.step != Step::VehicleType {
            return self.clone();
        }
        Self {
            step: Step::Priority,
            answers: WizardAnswers {
                vehicle_type: Some(vehicle),
                ..self.answers.clone()
            },
            recommendation: None,
        }
    }

    pub fn choose_priority(&self, priority: Priority) -> Self {
        if self.step != Step::Priority {
            return self.clone();
        }
        Self {
            step: Step::Result,
            answers: WizardAnswers {
                priority: Some(priority),
                ..self.answers.clone()
            },
            recommendation: Some(Recommendation::for_priority(priority)),
        }
    }

    pub fn start_over(&self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_depends_only_on_priority() {
        for vehicle in VehicleType::ALL {
            for priority in Priority::ALL {
                let done = Wizard::default()
                    .choose_vehicle(vehicle)
                    .choose_priority(priority);
                let expected = match priority {
                    Priority::LowestPrice => Recommendation::Basic,
                    Priority::ComprehensiveProtection => Recommendation::Comprehensive,
                    _ => Recommendation::Standard,
                };
                assert_eq!(done.step(), Step::Result);
                assert_eq!(done.recommendation(), Some(expected));
                assert_eq!(done.answers().vehicle_type, Some(vehicle));
                assert_eq!(done.answers().priority, Some(priority));
            }
        }
    }

    #[test]
    fn start_over_resets_from_every_step() {
        let first = Wizard::default();
        let second = first.choose_vehicle(VehicleType::Taxi);
        let third = second.choose_priority(Priority::QuickApproval);
        for state in [first, second, third] {
            let reset = state.start_over();
            assert_eq!(reset.step(), Step::VehicleType);
            assert_eq!(reset.answers(), &WizardAnswers::default());
            assert_eq!(reset.recommendation(), None);
        }
    }

    #[test]
    fn out_of_order_answers_are_ignored() {
        let start = Wizard::default();
        assert_eq!(start.choose_priority(Priority::LowestPrice), start);

        let second = start.choose_vehicle(VehicleType::Motorbike);
        assert_eq!(second.choose_vehicle(VehicleType::Taxi), second);
        assert_eq!(second.step().number(), 2);
    }

    #[test]
    fn labels_match_option_text() {
        assert_eq!(Priority::FireAndTheft.label(), "Fire & Theft Cover");
        assert_eq!(VehicleType::BusinessFleet.label(), "Business Fleet");
        assert_eq!(Recommendation::Comprehensive.label(), "Comprehensive");
    }
}
