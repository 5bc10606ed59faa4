use reqwest::blocking::Client;

use crate::credentials::Settings;
use crate::error::TransportError;
use crate::harvest::{Method, RequestDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a rendered request. Implementations do not retry.
pub trait Transport {
    fn execute(&self, descriptor: &RequestDescriptor) -> Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, descriptor: &RequestDescriptor) -> Result<Response, TransportError> {
        (**self).execute(descriptor)
    }
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(settings: &Settings) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, descriptor: &RequestDescriptor) -> String {
        format!("{}{}", self.base_url, descriptor.path)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, descriptor: &RequestDescriptor) -> Result<Response, TransportError> {
        let url = self.url(descriptor);
        let mut request = match descriptor.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        for (name, value) in &descriptor.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &descriptor.body {
            request = request
                .header("Content-Type", "application/json")
                .body(body.clone());
        }

        let response = request
            .send()
            .map_err(|err| TransportError::Network(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|err| TransportError::Network(err.to_string()))?;

        Ok(Response {
            status,
            body: body.to_vec(),
        })
    }
}

/// Offline transport answering with the sample payload the catalog put on
/// each descriptor.
#[derive(Debug, Clone, Default)]
pub struct FixtureTransport;

impl Transport for FixtureTransport {
    fn execute(&self, descriptor: &RequestDescriptor) -> Result<Response, TransportError> {
        let status = match descriptor.method {
            Method::Get => 200,
            Method::Post => 201,
        };
        Ok(Response {
            status,
            body: descriptor.sample.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;
    use crate::harvest::Harvest;

    #[test]
    fn url_joins_base_and_path() {
        let settings = Settings {
            base_url: "https://api.harvestapp.com/".to_string(),
            user_agent: "timesheets-test".to_string(),
        };
        let transport = HttpTransport::new(&settings).unwrap();
        let descriptor = Harvest::ListCurrentUserProjectAssignments
            .render(&Credentials::new("t", "a"), "timesheets-test")
            .unwrap();
        assert_eq!(
            transport.url(&descriptor),
            "https://api.harvestapp.com/v2/users/me/project_assignments"
        );
    }

    #[test]
    fn fixture_transport_answers_post_with_created() {
        let descriptor = Harvest::submit_full_day(1, 2, chrono::NaiveDate::from_ymd_opt(2017, 3, 21).unwrap())
            .render(&Credentials::new("t", "a"), "timesheets-test")
            .unwrap();
        let response = FixtureTransport.execute(&descriptor).unwrap();
        assert_eq!(response.status, 201);
        assert!(response.is_success());
        assert_eq!(response.body, crate::fixtures::TIME_ENTRY.as_bytes());
    }
}
