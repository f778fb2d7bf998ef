//! Shared controller helpers.
//!
//! [`ApiController`] bundles the helpers concrete API controllers reach for:
//! request value filtering, field formatting, expand resolution, common
//! schema fragments and field-gated permission checks. The schema engine,
//! formatter and permission checker are injected so the helpers stay free of
//! any particular framework.
//!
//! One controller is built per request; the cached user fragment lives
//! exactly as long as the controller does.

use once_cell::sync::OnceCell;

use crate::{
    api::{
        expand::{self, ExpandMap},
        formatting::{self, FieldFormatter},
        handlers,
        schema::{self, SchemaEngine, EXPAND_FRAGMENT, USER_FRAGMENT},
        values::{self, RequestData},
    },
    auth::{Permission, PermissionChecker},
    config::ApiSettings,
    Result,
};

pub struct ApiController<S, F, P>
where
    S: SchemaEngine,
{
    schema: S,
    formatter: F,
    permissions: P,
    settings: ApiSettings,
    user_fragment: OnceCell<S::Fragment>,
}

impl<S, F, P> ApiController<S, F, P>
where
    S: SchemaEngine,
    F: FieldFormatter,
    P: PermissionChecker,
{
    pub fn new(schema: S, formatter: F, permissions: P) -> Self {
        Self {
            schema,
            formatter,
            permissions,
            settings: ApiSettings::default(),
            user_fragment: OnceCell::new(),
        }
    }

    pub fn with_settings(mut self, settings: ApiSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    pub fn schema_engine(&self) -> &S {
        &self.schema
    }

    pub fn permissions(&self) -> &P {
        &self.permissions
    }

    /// Remove empty-string values from request data.
    pub fn filter_values(&self, values: RequestData) -> RequestData {
        values::filter_values(values)
    }

    /// Format `row[field]` in place, substituting the configured placeholder
    /// for an empty result. Absent fields are left alone.
    pub fn format_field(&self, row: &mut RequestData, field: &str, format: &str) {
        formatting::format_field(
            &self.formatter,
            row,
            field,
            format,
            &self.settings.empty_placeholder,
        );
    }

    /// Resolve the configured expand parameter (`expand` by default).
    pub fn get_expand_fields(&self, data: &RequestData, map: &ExpandMap) -> Result<Vec<String>> {
        self.get_expand_fields_from(data, map, &self.settings.expand_parameter)
    }

    /// Resolve the expand keywords stored under `field` into full field names,
    /// in `map` order.
    pub fn get_expand_fields_from(
        &self,
        data: &RequestData,
        map: &ExpandMap,
        field: &str,
    ) -> Result<Vec<String>> {
        expand::get_expand_fields(data, map, field)
    }

    /// Fragment describing the expand query parameter, limited to `fields`.
    pub fn get_expand_fragment<T: AsRef<str>>(&self, fields: &[T]) -> S::Fragment {
        self.schema
            .schema(schema::expand_fragment_definition(fields), EXPAND_FRAGMENT)
    }

    /// The user reference fragment, built on first use and reused afterwards.
    pub fn user_fragment_schema(&self) -> &S::Fragment {
        self.user_fragment.get_or_init(|| {
            tracing::debug!("Building user fragment schema");
            self.schema
                .schema(schema::user_fragment_definition(), USER_FRAGMENT)
        })
    }

    pub fn options(&self, path: &str) -> String {
        handlers::options(path)
    }

    /// Require `permission`, optionally scoped to resource `id`.
    pub fn permission(&self, permission: impl Into<Permission>, id: Option<i64>) -> Result<()> {
        let permission = permission.into();
        tracing::debug!(permission = ?permission.names(), resource_id = ?id, "Checking permission");
        self.permissions.check_permission(&permission, id)
    }

    /// Require `permission` only when `data` touches `field`.
    pub fn field_permission(
        &self,
        data: &RequestData,
        field: &str,
        permission: impl Into<Permission>,
        id: Option<i64>,
    ) -> Result<()> {
        if data.contains_key(field) {
            self.permission(permission, id)?;
        }
        Ok(())
    }
}
