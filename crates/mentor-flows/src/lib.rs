//! mentor-flows: flujos de onboarding concretos sobre `mentor-core`.
//!
//! Este crate provee:
//! - Las tablas de steps de cada flujo (Login, PartnerRegistration,
//!   ProfileSetting), declaradas con `flow_steps!`. Un único `FlowEngine`
//!   genérico las recorre a todas.
//! - `FlowKind` para elegir un flujo por nombre (CLI, configuración).
//! - `FlowHost`, que conecta engine, vista paginada, renderer y callback de
//!   completado tal como lo haría una pantalla host.

pub mod host;
pub mod steps;

pub use host::FlowHost;
pub use steps::login::LoginStep;
pub use steps::partner_registration::PartnerRegistrationStep;
pub use steps::profile_setting::ProfileSettingStep;
pub use steps::FlowKind;
