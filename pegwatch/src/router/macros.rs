/// Expand to a `Pegwatch` method that sends one provider call along a route.
///
/// `route` is a `Route` expression and may borrow the method's arguments; it
/// picks the capability label and how exhausted attempts are reported. Arguments
/// are owned once and cloned into each connector's future.
#[macro_export]
macro_rules! pegwatch_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $( $arg_ident:ident : $arg_ty:ty ),* ) -> $ret:ty,
        accessor: $accessor:ident,
        route: $route:expr,
        call: $call_name:ident( $( $call_arg:ident ),* )
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(target = "pegwatch::router", skip(self))
        )]
        ///
        /// # Errors
        /// `Unsupported` when no connector serves this endpoint, otherwise the
        /// collapsed failure of every connector that was tried.
        pub async fn $name(
            &self,
            $( $arg_ident: $arg_ty ),*
        ) -> Result<$ret, $crate::PegError> {
            let route = $route;
            $( let $arg_ident = $arg_ident.to_owned(); )*
            self.fetch_single(route, move |c| {
                c.$accessor()?;
                $( let $arg_ident = $arg_ident.clone(); )*
                Some(async move {
                    match c.$accessor() {
                        Some(p) => p.$call_name($( &$call_arg ),*).await,
                        None => Err($crate::PegError::connector(
                            c.name(),
                            concat!(stringify!($accessor), " withdrawn mid-call"),
                        )),
                    }
                })
            })
            .await
        }
    };
}
