/// What the mobile-only route should do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingDecision<'a> {
    /// Serve the current route.
    Continue,
    /// Issue an HTTP redirect to this path.
    RedirectTo(&'a str),
}
