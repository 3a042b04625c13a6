use crate::domain::ports::Marshaller;
use crate::utils::error::Result;
use std::collections::BTreeMap;

pub const SERVICE_NAME: &str = "AmazonEC2";
pub const DRY_RUN_PARAMETER: &str = "DryRun";

/// A request in marshalled form, ready for a transport to sign and send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    service_name: String,
    action: String,
    parameters: BTreeMap<String, String>,
}

impl WireRequest {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            service_name: SERVICE_NAME.to_string(),
            action: action.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Sets a parameter, replacing any previous value under the same name.
    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(name.into(), value.into());
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}

/// A request shape bound to one EC2 operation.
pub trait Ec2Request {
    const ACTION: &'static str;
}

/// Requests that can be previewed with `DryRun=true` before the real call.
///
/// Only the hook lives here: the marshaller produces the wire form and the
/// runtime decides what to do with it.
pub trait DryRunSupportedRequest: Ec2Request + Sized {
    fn dry_run_request<M>(&self, marshaller: &M) -> Result<WireRequest>
    where
        M: Marshaller<Self> + ?Sized,
    {
        let mut request = marshaller.marshall(self)?;
        request.add_parameter(DRY_RUN_PARAMETER, "true");
        tracing::debug!(
            action = request.action(),
            parameters = request.parameters().len(),
            "Prepared dry-run request"
        );
        Ok(request)
    }
}

/// Results split across pages. An absent or empty token means the last page.
pub trait PaginatedResult {
    fn next_token(&self) -> Option<&str>;

    fn has_more_results(&self) -> bool {
        self.next_token().is_some_and(|token| !token.is_empty())
    }
}

pub trait PaginatedRequest: Clone {
    fn set_next_token(&mut self, next_token: Option<String>);

    /// Follow-up request for the page after `result`, or `None` on the last page.
    fn next_page_request<R: PaginatedResult>(&self, result: &R) -> Option<Self> {
        if !result.has_more_results() {
            return None;
        }
        let mut next = self.clone();
        next.set_next_token(result.next_token().map(str::to_string));
        Some(next)
    }
}

/// Wires a request shape to its EC2 action, dry-run hook and, when the
/// operation pages, its next-token plumbing.
#[macro_export]
macro_rules! ec2_request {
    ($request:ident => $action:literal) => {
        impl $crate::core::request::Ec2Request for $request {
            const ACTION: &'static str = $action;
        }

        impl $crate::core::request::DryRunSupportedRequest for $request {}
    };
    ($request:ident => $action:literal, paginated by $result:ident) => {
        $crate::ec2_request!($request => $action);

        impl $crate::core::request::PaginatedRequest for $request {
            fn set_next_token(&mut self, next_token: ::std::option::Option<::std::string::String>) {
                $request::set_next_token(self, next_token);
            }
        }

        impl $crate::core::request::PaginatedResult for $result {
            fn next_token(&self) -> ::std::option::Option<&str> {
                $result::next_token(self)
            }
        }
    };
}
