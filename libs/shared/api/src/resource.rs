use std::fmt;

/// REST collections exposed by the clinic backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Appointments,
    AppointmentTypes,
    Patients,
    Practitioners,
    WorkingHours,
    Calls,
    Reminders,
    Users,
    SystemSettings,
    UserSettings,
    AuditLog,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Appointments => "appointments",
            Resource::AppointmentTypes => "appointment-types",
            Resource::Patients => "patients",
            Resource::Practitioners => "practitioners",
            Resource::WorkingHours => "working-hours",
            Resource::Calls => "calls",
            Resource::Reminders => "reminders",
            Resource::Users => "users",
            Resource::SystemSettings => "system-settings",
            Resource::UserSettings => "user-settings",
            Resource::AuditLog => "audit-log",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Query-string filters for list calls. Empty values are skipped so callers
/// can pass optional UI state straight through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilters {
    params: Vec<(String, String)>,
}

impl ListFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.trim().is_empty() {
            self.params.push((key.to_string(), value));
        }
        self
    }

    pub fn with_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_query_string(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        let parts: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();

        format!("?{}", parts.join("&"))
    }
}
