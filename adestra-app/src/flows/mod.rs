//! Interactive flows: onboarding gate, service editor wizard, booking wizard

pub mod booking;
pub mod onboarding;
pub mod service_editor;

pub use booking::{BookingFlow, BookingNav, PostalOutcome};
pub use onboarding::{OnboardingFlow, OnboardingState};
pub use service_editor::{EditorStep, ServiceEditor, ValidationPolicy};
