use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::{
    AboutPage, HomePage, HomeworkHelpPage, NotFoundPage, OnboardingPage, SettingsPage,
    StudyGroupsPage, StudyPage,
};
use crate::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/onboarding")]
    Onboarding,
    #[at("/home")]
    Home,
    #[at("/study")]
    Study,
    #[at("/about")]
    About,
    #[at("/homework-help")]
    HomeworkHelp,
    #[at("/groups")]
    Groups,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Where `/` sends the user.
    pub fn landing(onboarded: bool) -> Route {
        if onboarded {
            Route::Home
        } else {
            Route::Onboarding
        }
    }
}

/// Entry in the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", route: Route::Home, icon: "🏠" },
    NavItem { name: "Study", route: Route::Study, icon: "📖" },
    NavItem { name: "Homework", route: Route::HomeworkHelp, icon: "💬" },
    NavItem { name: "Groups", route: Route::Groups, icon: "👥" },
    NavItem { name: "About", route: Route::About, icon: "ℹ️" },
    NavItem { name: "Settings", route: Route::Settings, icon: "⚙️" },
];

pub fn switch(route: Route) -> Html {
    match route {
        Route::Root => {
            let to = Route::landing(storage::has_completed_onboarding());
            html! { <Redirect<Route> {to} /> }
        }
        Route::Onboarding => html! { <OnboardingPage /> },
        Route::Home => html! { <Layout><HomePage /></Layout> },
        Route::Study => html! { <Layout><StudyPage /></Layout> },
        Route::About => html! { <Layout><AboutPage /></Layout> },
        Route::HomeworkHelp => html! { <Layout><HomeworkHelpPage /></Layout> },
        Route::Groups => html! { <Layout><StudyGroupsPage /></Layout> },
        Route::Settings => html! { <Layout><SettingsPage /></Layout> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_depends_on_marker() {
        assert_eq!(Route::landing(true), Route::Home);
        assert_eq!(Route::landing(false), Route::Onboarding);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::HomeworkHelp.to_path(), "/homework-help");
        assert_eq!(Route::Groups.to_path(), "/groups");
        assert_eq!(Route::recognize("/settings"), Some(Route::Settings));
        assert_eq!(Route::recognize("/does-not-exist"), Some(Route::NotFound));
    }

    #[test]
    fn test_nav_items_are_shell_routes() {
        assert_eq!(NAV_ITEMS.len(), 6);
        assert!(NAV_ITEMS
            .iter()
            .all(|item| !matches!(item.route, Route::Root | Route::Onboarding | Route::NotFound)));
    }
}
