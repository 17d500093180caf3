use tonic::{Request, Response, Status};

use crate::proto::health::{
    health_check_response::ServingStatus, health_server::Health, HealthCheckRequest,
    HealthCheckResponse,
};

/// Reports SERVING for the whole server and for every registered service name.
#[derive(Debug, Default)]
pub struct HealthServiceImpl;

impl HealthServiceImpl {
    pub fn new() -> Self {
        Self
    }

    fn serving() -> HealthCheckResponse {
        HealthCheckResponse {
            status: ServingStatus::Serving.into(),
        }
    }
}

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    async fn check(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        tracing::debug!("Health check: service={:?}", request.get_ref().service);
        Ok(Response::new(Self::serving()))
    }

    type WatchStream = tokio_stream::wrappers::ReceiverStream<Result<HealthCheckResponse, Status>>;

    async fn watch(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        let (tx, rx) = tokio::sync::mpsc::channel(1);

        tokio::spawn(async move {
            let _ = tx.send(Ok(Self::serving())).await;
        });

        Ok(Response::new(tokio_stream::wrappers::ReceiverStream::new(rx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_reports_serving() {
        let response = HealthServiceImpl::new()
            .check(Request::new(HealthCheckRequest {
                service: "freight.inventory.FreightService".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.status, ServingStatus::Serving as i32);
    }
}
