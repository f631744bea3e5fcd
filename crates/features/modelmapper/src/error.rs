use std::borrow::Cow;

/// Errors raised while turning raw records into typed events.
#[bitsd_derive::bitsd_error]
pub enum MapperError {
    /// A required field is missing, null, of the wrong primitive kind, or
    /// carries a value outside its enumeration.
    #[error("Malformed record field `{field}`{}: {reason}", format_context(.context))]
    MalformedRecord {
        field: Cow<'static, str>,
        reason: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The raw input was not valid JSON or did not have the expected shape.
    #[error("JSON decoding error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

impl MapperError {
    pub(crate) fn malformed(
        field: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::MalformedRecord { field: field.into(), reason: reason.into(), context: None }
    }

    /// Name of the offending field for [`MapperError::MalformedRecord`].
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedRecord { field, .. } => Some(field),
            Self::Json { .. } => None,
        }
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::MalformedRecord { reason, .. } => Some(reason),
            Self::Json { .. } => None,
        }
    }

    /// Prefixes the context with an enclosing scope, keeping the inner location.
    pub(crate) fn within(mut self, scope: &'static str) -> Self {
        let (Self::MalformedRecord { context, .. } | Self::Json { context, .. }) = &mut self;
        *context = Some(match context.take() {
            Some(inner) => Cow::Owned(format!("{scope}: {inner}")),
            None => Cow::Borrowed(scope),
        });
        self
    }
}
