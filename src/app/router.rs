//! Path → view resolution with guard redirects.

use minijinja::Value;

use crate::app::AppContext;
use crate::app::views::admin::{
    AdminApplicationsView, AdminComplaintsView, AdminDashboardView, AdminEmployersView,
    AdminLoginView,
};
use crate::app::views::employer::{EmployerDashboardView, EmployerLoginView, EmployerRegisterView};
use crate::app::views::home::HomeView;
use crate::app::views::worker::{
    ApplicationsView, ComplaintView, ComplaintsView, DashboardView, EmployersView, JobsView,
    LoginView, ProfileView, RegisterView,
};
use crate::app::views::{Activation, View};
use crate::domain::{AppError, Location, Route};
use crate::ports::{ApiTransport, SessionStore};

/// Redirect hops followed before giving up.
pub const MAX_REDIRECTS: usize = 4;

macro_rules! pages {
    ($($variant:ident($view:ty)),+ $(,)?) => {
        /// An activated view, one variant per route.
        #[derive(Debug)]
        pub enum Page {
            $($variant($view),)+
        }

        impl Page {
            pub fn route(&self) -> Route {
                match self {
                    $(Page::$variant(_) => <$view as View>::ROUTE,)+
                }
            }

            pub fn has_failure(&self) -> bool {
                match self {
                    $(Page::$variant(view) => view.has_failure(),)+
                }
            }

            /// Template context for the view's state.
            pub fn context(&self) -> Value {
                match self {
                    $(Page::$variant(view) => Value::from_serialize(view),)+
                }
            }
        }

        fn activate<T: ApiTransport, S: SessionStore>(
            ctx: &AppContext<T, S>,
            route: Route,
            location: &Location,
        ) -> Activation<Page> {
            $(
                if route == <$view as View>::ROUTE {
                    return match <$view as View>::activate(ctx, location) {
                        Activation::Ready(view) => Activation::Ready(Page::$variant(view)),
                        Activation::Redirect(to) => Activation::Redirect(to),
                    };
                }
            )+
            Activation::Redirect(Route::Home)
        }
    };
}

pages! {
    Home(HomeView),
    Register(RegisterView),
    Login(LoginView),
    Dashboard(DashboardView),
    Profile(ProfileView),
    Complaint(ComplaintView),
    Complaints(ComplaintsView),
    Employers(EmployersView),
    Jobs(JobsView),
    Applications(ApplicationsView),
    AdminLogin(AdminLoginView),
    AdminDashboard(AdminDashboardView),
    AdminApplications(AdminApplicationsView),
    AdminComplaints(AdminComplaintsView),
    AdminEmployers(AdminEmployersView),
    EmployerRegister(EmployerRegisterView),
    EmployerLogin(EmployerLoginView),
    EmployerDashboard(EmployerDashboardView),
}

/// Outcome of opening a location.
#[derive(Debug)]
pub struct Navigation {
    /// Every route entered, in order; the last one is where the page lives.
    pub chain: Vec<Route>,
    pub page: Page,
}

impl Navigation {
    pub fn redirected(&self) -> bool {
        self.chain.len() > 1
    }
}

/// Open a raw location such as `/jobs?skill=mason`, following redirects.
///
/// Unknown paths land on home; guarded routes without a session land on the
/// role's login route.
pub fn open<T: ApiTransport, S: SessionStore>(
    ctx: &AppContext<T, S>,
    raw: &str,
) -> Result<Navigation, AppError> {
    let mut location = Location::parse(raw);
    let mut chain = Vec::new();

    let mut route = match location.route {
        Some(route) => route,
        None => {
            tracing::debug!(path = %location.path, "Unknown path; redirecting home");
            location = Location::for_route(Route::Home);
            Route::Home
        }
    };

    loop {
        chain.push(route);
        match activate(ctx, route, &location) {
            Activation::Ready(page) => return Ok(Navigation { chain, page }),
            Activation::Redirect(next) => {
                tracing::debug!(from = %route, to = %next, "Redirect");
                if chain.len() > MAX_REDIRECTS {
                    return Err(AppError::parse_error(
                        "navigation",
                        format!("too many redirects starting at {}", location.path),
                    ));
                }
                route = next;
                location = Location::for_route(next);
            }
        }
    }
}
