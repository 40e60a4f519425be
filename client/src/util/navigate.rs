//! Navigation seam between page controllers and `leptos_router`.

use leptos_router::NavigateOptions;

/// Moves the app to another route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Adapter over the closure returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}
