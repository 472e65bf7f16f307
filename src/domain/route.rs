//! Client-side route table.

use std::collections::BTreeMap;
use std::fmt;

use url::Url;

use crate::domain::Role;

/// Every path the portal knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Register,
    Login,
    Dashboard,
    Profile,
    Complaint,
    Complaints,
    Employers,
    Jobs,
    Applications,
    AdminLogin,
    AdminDashboard,
    AdminApplications,
    AdminComplaints,
    AdminEmployers,
    EmployerRegister,
    EmployerLogin,
    EmployerDashboard,
}

impl Route {
    pub const ALL: [Route; 18] = [
        Route::Home,
        Route::Register,
        Route::Login,
        Route::Dashboard,
        Route::Profile,
        Route::Complaint,
        Route::Complaints,
        Route::Employers,
        Route::Jobs,
        Route::Applications,
        Route::AdminLogin,
        Route::AdminDashboard,
        Route::AdminApplications,
        Route::AdminComplaints,
        Route::AdminEmployers,
        Route::EmployerRegister,
        Route::EmployerLogin,
        Route::EmployerDashboard,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Profile => "/profile",
            Route::Complaint => "/complaint",
            Route::Complaints => "/complaints",
            Route::Employers => "/employers",
            Route::Jobs => "/jobs",
            Route::Applications => "/applications",
            Route::AdminLogin => "/admin-login",
            Route::AdminDashboard => "/admin-dashboard",
            Route::AdminApplications => "/admin-applications",
            Route::AdminComplaints => "/admin-complaints",
            Route::AdminEmployers => "/admin-employers",
            Route::EmployerRegister => "/employer-register",
            Route::EmployerLogin => "/employer-login",
            Route::EmployerDashboard => "/employer-dashboard",
        }
    }

    /// Template rendered for the route, relative to the embedded views directory.
    pub fn template(self) -> &'static str {
        match self {
            Route::Home => "home.txt.j2",
            Route::Register => "register.txt.j2",
            Route::Login => "login.txt.j2",
            Route::Dashboard => "dashboard.txt.j2",
            Route::Profile => "profile.txt.j2",
            Route::Complaint => "complaint.txt.j2",
            Route::Complaints => "complaints.txt.j2",
            Route::Employers => "employers.txt.j2",
            Route::Jobs => "jobs.txt.j2",
            Route::Applications => "applications.txt.j2",
            Route::AdminLogin => "admin-login.txt.j2",
            Route::AdminDashboard => "admin-dashboard.txt.j2",
            Route::AdminApplications => "admin-applications.txt.j2",
            Route::AdminComplaints => "admin-complaints.txt.j2",
            Route::AdminEmployers => "admin-employers.txt.j2",
            Route::EmployerRegister => "employer-register.txt.j2",
            Route::EmployerLogin => "employer-login.txt.j2",
            Route::EmployerDashboard => "employer-dashboard.txt.j2",
        }
    }

    /// Role whose session the route's guard checks.
    pub fn required_role(self) -> Option<Role> {
        match self {
            Route::Dashboard
            | Route::Profile
            | Route::Complaint
            | Route::Complaints
            | Route::Employers
            | Route::Jobs
            | Route::Applications => Some(Role::Worker),
            Route::AdminDashboard
            | Route::AdminApplications
            | Route::AdminComplaints
            | Route::AdminEmployers => Some(Role::Admin),
            Route::EmployerDashboard => Some(Role::Employer),
            Route::Home
            | Route::Register
            | Route::Login
            | Route::AdminLogin
            | Route::EmployerRegister
            | Route::EmployerLogin => None,
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Route::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A parsed location: the matched route (if any) plus its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub route: Option<Route>,
    pub query: BTreeMap<String, String>,
}

impl Location {
    /// Parse a location string such as `/jobs?skill=mason` or `#!/jobs`.
    pub fn parse(raw: &str) -> Location {
        let stripped = raw.trim().trim_start_matches('#').trim_start_matches('!');
        let with_slash =
            if stripped.starts_with('/') { stripped.to_string() } else { format!("/{stripped}") };

        let joined = Url::parse("http://portal.local").and_then(|base| base.join(&with_slash));
        let (path, query) = match joined {
            Ok(url) => {
                let query = url
                    .query_pairs()
                    .filter(|(_, v)| !v.is_empty())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect();
                (url.path().to_string(), query)
            }
            Err(_) => (with_slash, BTreeMap::new()),
        };

        let route = Route::from_path(&path);
        Location { path, route, query }
    }

    pub fn for_route(route: Route) -> Location {
        Location { path: route.path().to_string(), route: Some(route), query: BTreeMap::new() }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}
