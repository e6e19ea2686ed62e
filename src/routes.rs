// Route path constants - single source of truth for all IMS client paths

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::ApiError;

pub const ROOT: &str = "/";
pub const PREFIX: &str = "/ims/";
pub const URLS_JS: &str = "/ims/urls.js";

// API
pub const API: &str = "/ims/api/";
pub const PING: &str = "/ims/api/ping/";
pub const BAG: &str = "/ims/api/bag";
pub const AUTH: &str = "/ims/api/auth";
pub const ACL: &str = "/ims/api/access";
pub const STREETS: &str = "/ims/api/streets";
pub const PERSONNEL: &str = "/ims/api/personnel/";
pub const INCIDENT_TYPES: &str = "/ims/api/incident_types/";
pub const EVENTS: &str = "/ims/api/events/";
pub const EVENT: &str = "/ims/api/events/<event_id>/";
pub const INCIDENTS: &str = "/ims/api/events/<event_id>/incidents/";
pub const INCIDENT_NUMBER: &str = "/ims/api/events/<event_id>/incidents/<incident_number>";
pub const INCIDENT_REPORT_ENTRIES: &str =
    "/ims/api/events/<event_id>/incidents/<incident_number>/report_entries";
pub const INCIDENT_REPORT_ENTRY: &str =
    "/ims/api/events/<event_id>/incidents/<incident_number>/report_entries/<report_entry_id>";
pub const INCIDENT_ATTACHMENTS: &str =
    "/ims/api/events/<event_id>/incidents/<incident_number>/attachments/";
pub const INCIDENT_ATTACHMENT_NUMBER: &str =
    "/ims/api/events/<event_id>/incidents/<incident_number>/attachments/<attachment_number>";
pub const FIELD_REPORTS: &str = "/ims/api/events/<event_id>/field_reports/";
pub const FIELD_REPORT: &str = "/ims/api/events/<event_id>/field_reports/<field_report_number>";
pub const FIELD_REPORT_REPORT_ENTRIES: &str =
    "/ims/api/events/<event_id>/field_reports/<field_report_number>/report_entries";
pub const FIELD_REPORT_REPORT_ENTRY: &str =
    "/ims/api/events/<event_id>/field_reports/<field_report_number>/report_entries/<report_entry_id>";
pub const EVENT_SOURCE: &str = "/ims/api/eventsource";

// Static assets
pub const STATIC: &str = "/ims/static";
pub const STYLE_SHEET: &str = "/ims/static/style.css";
pub const LOGO: &str = "/ims/static/logo.png";

// Auth
pub const AUTH_APP: &str = "/ims/auth/";
pub const LOGIN: &str = "/ims/auth/login";
pub const LOGIN_JS: &str = "/ims/static/login.js";
pub const LOGOUT: &str = "/ims/auth/logout";

// Vendored external assets
pub const EXTERNAL: &str = "/ims/ext/";
pub const JQUERY_BASE: &str = "/ims/ext/jquery/";
pub const JQUERY_JS: &str = "/ims/ext/jquery/jquery.min.js";
pub const JQUERY_MAP: &str = "/ims/ext/jquery/jquery.min.map";
pub const BOOTSTRAP_BASE: &str = "/ims/ext/bootstrap/";
pub const BOOTSTRAP_CSS: &str = "/ims/ext/bootstrap/css/bootstrap.min.css";
pub const BOOTSTRAP_JS: &str = "/ims/ext/bootstrap/js/bootstrap.bundle.min.js";
pub const DATA_TABLES_BASE: &str = "/ims/ext/datatables/";
pub const DATA_TABLES_JS: &str = "/ims/ext/datatables/js/dataTables.min.js";
pub const DATA_TABLES_BOOTSTRAP_CSS: &str =
    "/ims/ext/datatables/css/dataTables.bootstrap5.min.css";
pub const DATA_TABLES_BOOTSTRAP_JS: &str = "/ims/ext/datatables/js/dataTables.bootstrap5.min.js";
pub const DATA_TABLES_RESPONSIVE_CSS: &str =
    "/ims/ext/datatables/css/responsive.dataTables.min.css";
pub const DATA_TABLES_RESPONSIVE_JS: &str =
    "/ims/ext/datatables/js/dataTables.responsive.min.js";

// Application views
pub const APP: &str = "/ims/app/";
pub const ROOT_JS: &str = "/ims/static/root.js";
pub const IMS_JS: &str = "/ims/static/ims.js";
pub const THEME_JS: &str = "/ims/static/theme.js";
pub const ADMIN: &str = "/ims/app/admin/";
pub const ADMIN_ROOT_JS: &str = "/ims/static/admin_root.js";
pub const ADMIN_EVENTS: &str = "/ims/app/admin/events";
pub const ADMIN_EVENTS_JS: &str = "/ims/static/admin_events.js";
pub const ADMIN_INCIDENT_TYPES: &str = "/ims/app/admin/types";
pub const ADMIN_INCIDENT_TYPES_JS: &str = "/ims/static/admin_types.js";
pub const ADMIN_STREETS: &str = "/ims/app/admin/streets";
pub const ADMIN_STREETS_JS: &str = "/ims/static/admin_streets.js";
pub const VIEW_EVENTS: &str = "/ims/app/events/";
pub const VIEW_EVENT: &str = "/ims/app/events/<event_id>/";
pub const VIEW_INCIDENTS: &str = "/ims/app/events/<event_id>/incidents/";
pub const VIEW_INCIDENTS_JS: &str = "/ims/static/incidents.js";
pub const VIEW_INCIDENTS_RELATIVE: &str = "incidents/";
pub const VIEW_INCIDENT_NUMBER: &str = "/ims/app/events/<event_id>/incidents/<number>";
pub const VIEW_INCIDENT_JS: &str = "/ims/static/incident.js";
pub const VIEW_FIELD_REPORTS: &str = "/ims/app/events/<event_id>/field_reports/";
pub const VIEW_FIELD_REPORTS_JS: &str = "/ims/static/field_reports.js";
pub const VIEW_FIELD_REPORTS_RELATIVE: &str = "field_reports/";
pub const VIEW_FIELD_REPORT_NEW: &str = "/ims/app/events/<event_id>/field_reports/new";
pub const VIEW_FIELD_REPORT_NUMBER: &str = "/ims/app/events/<event_id>/field_reports/<number>";
pub const VIEW_FIELD_REPORT_JS: &str = "/ims/static/field_report.js";

/// Paths served by the manifest service itself. Not part of the IMS table.
pub mod service {
    pub const HEALTH: &str = "/health";
    pub const ROUTE_LIST: &str = "/routes";
    pub const ROUTE_ITEM: &str = "/routes/{name}";
}

/// A named path template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: &'static str,
    pub template: &'static str,
}

impl RouteEntry {
    const fn new(name: &'static str, template: &'static str) -> Self {
        Self { name, template }
    }

    /// Relative templates resolve against the current page, not the site root.
    pub fn is_relative(&self) -> bool {
        !self.template.starts_with('/')
    }
}

/// The IMS route table, in the order the browser client declares it.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::new("root", ROOT),
    RouteEntry::new("prefix", PREFIX),
    RouteEntry::new("urlsJS", URLS_JS),
    RouteEntry::new("api", API),
    RouteEntry::new("ping", PING),
    RouteEntry::new("bag", BAG),
    RouteEntry::new("auth", AUTH),
    RouteEntry::new("acl", ACL),
    RouteEntry::new("streets", STREETS),
    RouteEntry::new("personnel", PERSONNEL),
    RouteEntry::new("incidentTypes", INCIDENT_TYPES),
    RouteEntry::new("events", EVENTS),
    RouteEntry::new("event", EVENT),
    RouteEntry::new("incidents", INCIDENTS),
    RouteEntry::new("incidentNumber", INCIDENT_NUMBER),
    RouteEntry::new("incident_reportEntries", INCIDENT_REPORT_ENTRIES),
    RouteEntry::new("incident_reportEntry", INCIDENT_REPORT_ENTRY),
    RouteEntry::new("incidentAttachments", INCIDENT_ATTACHMENTS),
    RouteEntry::new("incidentAttachmentNumber", INCIDENT_ATTACHMENT_NUMBER),
    RouteEntry::new("fieldReports", FIELD_REPORTS),
    RouteEntry::new("fieldReport", FIELD_REPORT),
    RouteEntry::new("fieldReport_reportEntries", FIELD_REPORT_REPORT_ENTRIES),
    RouteEntry::new("fieldReport_reportEntry", FIELD_REPORT_REPORT_ENTRY),
    RouteEntry::new("eventSource", EVENT_SOURCE),
    RouteEntry::new("static", STATIC),
    RouteEntry::new("styleSheet", STYLE_SHEET),
    RouteEntry::new("logo", LOGO),
    RouteEntry::new("authApp", AUTH_APP),
    RouteEntry::new("login", LOGIN),
    RouteEntry::new("loginJS", LOGIN_JS),
    RouteEntry::new("logout", LOGOUT),
    RouteEntry::new("external", EXTERNAL),
    RouteEntry::new("jqueryBase", JQUERY_BASE),
    RouteEntry::new("jqueryJS", JQUERY_JS),
    RouteEntry::new("jqueryMap", JQUERY_MAP),
    RouteEntry::new("bootstrapBase", BOOTSTRAP_BASE),
    RouteEntry::new("bootstrapCSS", BOOTSTRAP_CSS),
    RouteEntry::new("bootstrapJS", BOOTSTRAP_JS),
    RouteEntry::new("dataTablesBase", DATA_TABLES_BASE),
    RouteEntry::new("dataTablesJS", DATA_TABLES_JS),
    RouteEntry::new("dataTablesBootstrapCSS", DATA_TABLES_BOOTSTRAP_CSS),
    RouteEntry::new("dataTablesBootstrapJS", DATA_TABLES_BOOTSTRAP_JS),
    RouteEntry::new("dataTablesResponsiveCSS", DATA_TABLES_RESPONSIVE_CSS),
    RouteEntry::new("dataTablesResponsiveJS", DATA_TABLES_RESPONSIVE_JS),
    RouteEntry::new("app", APP),
    RouteEntry::new("rootJS", ROOT_JS),
    RouteEntry::new("imsJS", IMS_JS),
    RouteEntry::new("themeJS", THEME_JS),
    RouteEntry::new("admin", ADMIN),
    RouteEntry::new("adminRootJS", ADMIN_ROOT_JS),
    RouteEntry::new("adminEvents", ADMIN_EVENTS),
    RouteEntry::new("adminEventsJS", ADMIN_EVENTS_JS),
    RouteEntry::new("adminIncidentTypes", ADMIN_INCIDENT_TYPES),
    RouteEntry::new("adminIncidentTypesJS", ADMIN_INCIDENT_TYPES_JS),
    RouteEntry::new("adminStreets", ADMIN_STREETS),
    RouteEntry::new("adminStreetsJS", ADMIN_STREETS_JS),
    RouteEntry::new("viewEvents", VIEW_EVENTS),
    RouteEntry::new("viewEvent", VIEW_EVENT),
    RouteEntry::new("viewIncidents", VIEW_INCIDENTS),
    RouteEntry::new("viewIncidentsJS", VIEW_INCIDENTS_JS),
    RouteEntry::new("viewIncidentsRelative", VIEW_INCIDENTS_RELATIVE),
    RouteEntry::new("viewIncidentNumber", VIEW_INCIDENT_NUMBER),
    RouteEntry::new("viewIncidentJS", VIEW_INCIDENT_JS),
    RouteEntry::new("viewFieldReports", VIEW_FIELD_REPORTS),
    RouteEntry::new("viewFieldReportsJS", VIEW_FIELD_REPORTS_JS),
    RouteEntry::new("viewFieldReportsRelative", VIEW_FIELD_REPORTS_RELATIVE),
    RouteEntry::new("viewFieldReportNew", VIEW_FIELD_REPORT_NEW),
    RouteEntry::new("viewFieldReportNumber", VIEW_FIELD_REPORT_NUMBER),
    RouteEntry::new("viewFieldReportJS", VIEW_FIELD_REPORT_JS),
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn names_unique(routes: &[RouteEntry]) -> bool {
    let mut i = 0;
    while i < routes.len() {
        let mut j = i + 1;
        while j < routes.len() {
            if str_eq(routes[i].name, routes[j].name) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(names_unique(ROUTES), "duplicate route name in ROUTES");

static INDEX: LazyLock<HashMap<&'static str, RouteEntry>> =
    LazyLock::new(|| entries().iter().map(|r| (r.name, *r)).collect());

/// The whole table, in declaration order
pub fn entries() -> &'static [RouteEntry] {
    ROUTES
}

/// Look up the full entry for a route name
pub fn entry(name: &str) -> Result<RouteEntry, ApiError> {
    INDEX
        .get(name)
        .copied()
        .ok_or_else(|| ApiError::UnknownRoute(name.to_string()))
}

/// Look up a path template by its route name
///
/// Prefer the typed constants for names known at compile time; this is for
/// names that arrive as data (query strings, client manifests).
pub fn get(name: &str) -> Result<&'static str, ApiError> {
    entry(name).map(|r| r.template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_get_incident_number() {
        assert_eq!(
            get("incidentNumber").unwrap(),
            "/ims/api/events/<event_id>/incidents/<incident_number>"
        );
    }

    #[test]
    fn test_get_login_js() {
        assert_eq!(get("loginJS").unwrap(), "/ims/static/login.js");
    }

    #[test]
    fn test_get_unknown_route() {
        let result = get("doesNotExist");
        match result {
            Err(ApiError::UnknownRoute(name)) => assert_eq!(name, "doesNotExist"),
            other => panic!("expected UnknownRoute, got {:?}", other),
        }
    }

    #[test]
    fn test_get_is_case_sensitive() {
        assert!(get("LOGINJS").is_err());
        assert!(get("").is_err());
    }

    #[test]
    fn test_entry_matches_get() {
        for route in ROUTES {
            assert_eq!(entry(route.name).unwrap(), *route);
            assert_eq!(get(route.name).unwrap(), route.template);
        }
        assert!(entry("doesNotExist").is_err());
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = ROUTES.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), ROUTES.len());
        assert_eq!(INDEX.len(), ROUTES.len());
    }

    #[test]
    fn test_table_size() {
        assert_eq!(ROUTES.len(), 69);
    }

    #[test]
    fn test_entries_in_declaration_order() {
        let table = entries();
        assert_eq!(table.len(), 69);
        assert_eq!(table[0], RouteEntry::new("root", ROOT));
        assert_eq!(table[1], RouteEntry::new("prefix", PREFIX));
        assert_eq!(table[14], RouteEntry::new("incidentNumber", INCIDENT_NUMBER));
        assert_eq!(
            table[table.len() - 1],
            RouteEntry::new("viewFieldReportJS", VIEW_FIELD_REPORT_JS)
        );
        for (i, route) in table.iter().enumerate() {
            assert_eq!(*route, ROUTES[i]);
        }
    }

    #[test]
    fn test_entry_and_get_share_lookup() {
        for route in entries() {
            let found = entry(route.name).unwrap();
            assert_eq!(found, *route);
            assert_eq!(get(route.name).unwrap(), found.template);
        }
        assert_eq!(
            entry("doesNotExist"),
            Err(ApiError::UnknownRoute("doesNotExist".to_string()))
        );
        assert_eq!(
            get("doesNotExist"),
            Err(ApiError::UnknownRoute("doesNotExist".to_string()))
        );
    }

    #[test]
    fn test_absolute_templates_share_prefix() {
        for route in ROUTES.iter().filter(|r| !r.is_relative() && r.name != "root") {
            assert!(
                route.template.starts_with(PREFIX),
                "{} = {} is outside {}",
                route.name,
                route.template,
                PREFIX
            );
        }
    }

    #[test]
    fn test_relative_routes() {
        let relative: Vec<_> = ROUTES
            .iter()
            .filter(|r| r.is_relative())
            .map(|r| r.name)
            .collect();
        assert_eq!(relative, vec!["viewIncidentsRelative", "viewFieldReportsRelative"]);
    }

    #[test]
    fn test_event_children_nest_under_event() {
        for route in ROUTES.iter().filter(|r| r.template.contains("<event_id>")) {
            let parent = if route.template.starts_with(API) {
                EVENT
            } else {
                VIEW_EVENT
            };
            assert!(
                route.template.starts_with(parent),
                "{} does not nest under {}",
                route.template,
                parent
            );
        }
        assert!(INCIDENTS.starts_with(EVENT) && INCIDENTS != EVENT);
        assert!(FIELD_REPORTS.starts_with(EVENT) && FIELD_REPORTS != EVENT);
        assert!(VIEW_INCIDENTS.starts_with(VIEW_EVENT));
        assert!(VIEW_FIELD_REPORTS.starts_with(VIEW_EVENT));
    }

    #[test]
    fn test_report_entries_nest_under_parent() {
        assert!(INCIDENT_REPORT_ENTRIES.starts_with(INCIDENT_NUMBER));
        assert!(INCIDENT_REPORT_ENTRY.starts_with(INCIDENT_REPORT_ENTRIES));
        assert!(INCIDENT_ATTACHMENT_NUMBER.starts_with(INCIDENT_ATTACHMENTS));
        assert!(FIELD_REPORT_REPORT_ENTRIES.starts_with(FIELD_REPORT));
        assert!(FIELD_REPORT_REPORT_ENTRY.starts_with(FIELD_REPORT_REPORT_ENTRIES));
    }

    #[test]
    fn test_namespaces() {
        assert!(get("streets").unwrap().starts_with("/ims/api/"));
        assert!(get("styleSheet").unwrap().starts_with("/ims/static/"));
        assert!(get("jqueryJS").unwrap().starts_with("/ims/ext/"));
        assert!(get("adminEvents").unwrap().starts_with("/ims/app/"));
        assert!(get("login").unwrap().starts_with("/ims/auth/"));
    }

    #[test]
    fn test_service_paths_not_in_table() {
        for path in [service::HEALTH, service::ROUTE_LIST, service::ROUTE_ITEM] {
            assert!(ROUTES.iter().all(|r| r.template != path));
        }
    }

    #[test]
    fn test_const_helpers() {
        assert!(str_eq("abc", "abc"));
        assert!(!str_eq("abc", "abd"));
        assert!(!str_eq("abc", "ab"));
        let dup = [RouteEntry::new("a", "/x"), RouteEntry::new("a", "/y")];
        assert!(!names_unique(&dup));
    }
}
