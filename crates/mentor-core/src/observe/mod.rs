//! Estado observable publicado (sujeto/observador síncrono).

mod observable;

pub use observable::{Observable, SubscriptionId};
