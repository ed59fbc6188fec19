//! Macro utilitaria para declarar tablas de steps estáticas.
//!
//! Exportada en la raíz del crate:
//!   use mentor_core::flow_steps;

/// Declara un enum de steps con su contenido y la implementación de
/// `StepContent`. Genera además `ALL` (orden de declaración) y `all()`.
///
/// ```ignore
/// flow_steps! {
///     pub enum GreetingStep {
///         Hello { main_title: "Hola", sub_title: "Bienvenido", action_label: "Siguiente" },
///         Bye { main_title: "Adiós", sub_title: "Hasta pronto", action_label: "Terminar" },
///     }
/// }
/// ```
#[macro_export]
macro_rules! flow_steps {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident {
                    main_title: $main:expr,
                    sub_title: $sub:expr,
                    action_label: $action:expr $(,)?
                }
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Todos los steps en orden de declaración.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn all() -> ::std::vec::Vec<$name> {
                Self::ALL.to_vec()
            }
        }

        impl $crate::step::StepContent for $name {
            fn main_title(&self) -> &str {
                match self { $($name::$variant => $main),+ }
            }

            fn sub_title(&self) -> &str {
                match self { $($name::$variant => $sub),+ }
            }

            fn action_label(&self) -> &str {
                match self { $($name::$variant => $action),+ }
            }
        }
    };
}
