use crate::{
    auth::guard::{Area, Decision, SessionGuard},
    models::domain::Role,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Admin,
    Teacher,
    Student,
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Admin => "/admin",
            Route::Teacher => "/teacher",
            Route::Student => "/student",
            Route::Home => "/",
        }
    }

    /// Unknown paths fall back to `Home`.
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/admin" => Route::Admin,
            "/teacher" => Route::Teacher,
            "/student" => Route::Student,
            _ => Route::Home,
        }
    }

    pub fn area(&self) -> Option<Area> {
        match self {
            Route::Admin => Some(Area::Admin),
            Route::Teacher => Some(Area::Teacher),
            Route::Student => Some(Area::Student),
            Route::Login | Route::Register | Route::Home => None,
        }
    }
}

pub fn home_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::Admin,
        Role::Teacher => Route::Teacher,
        Role::Student => Route::Student,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

/// Turns a guard decision into where the client should actually go.
pub fn navigate(guard: &SessionGuard, route: Route) -> Navigation {
    match route {
        Route::Login | Route::Register => match guard.current_role() {
            Some(role) => Navigation::Redirect(home_for(role)),
            None => Navigation::Render(route),
        },
        Route::Home => match guard.current_role() {
            Some(role) => Navigation::Redirect(home_for(role)),
            None => Navigation::Redirect(Route::Login),
        },
        Route::Admin | Route::Teacher | Route::Student => {
            let Some(area) = route.area() else {
                return Navigation::Redirect(Route::Home);
            };
            match guard.authorize_area(area) {
                Decision::Admit => Navigation::Render(route),
                Decision::RedirectToLogin => Navigation::Redirect(Route::Login),
                Decision::RedirectToRole(role) => Navigation::Redirect(home_for(role)),
            }
        }
    }
}
