/// Generate a router async method that selects the first connector
/// advertising a capability and delegates the call to it.
///
/// Per the dashboard's error policy there is no fallback to later
/// connectors on failure; the provider's error is returned as-is, already
/// tagged with the connector name by the provider crates.
macro_rules! vetrina_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $sym_ident:ident $(, $arg_ident:ident : $arg_ty:ty )* ) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr
    ) => {
        $(#[$meta])*
        ///
        /// # Errors
        /// Returns `Unsupported` when no registered connector advertises the
        /// capability; otherwise propagates the serving provider's error.
        pub async fn $name(
            &self,
            $sym_ident: &vetrina_core::Symbol,
            $( $arg_ident: $arg_ty ),*
        ) -> Result<$ret, vetrina_core::VetrinaError> {
            let Some(provider) = self.connectors.iter().find_map(|c| c.$accessor()) else {
                return Err(vetrina_core::VetrinaError::unsupported($capability));
            };
            provider.$name($sym_ident $(, $arg_ident )*).await
        }
    };
}

pub(crate) use vetrina_router_method;
