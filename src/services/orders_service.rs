use tonic::{Request, Response, Status};

use crate::middleware::get_authenticated_user;
use crate::models::{Order, OrderDraft, OrderStatus, OrderWithQuote, QuoteState};
use crate::proto::common::Empty;
use crate::proto::orders::order_service_server::OrderService;
use crate::proto::orders::{
    self as pb, CancelOrderRequest, CompleteOrderResponse, CreateOrderRequest, ListOrdersRequest,
    ListOrdersResponse, OrderIdRequest, OrderResponse, OrderSummaryResponse,
};
use crate::workflows::QuoteToOrder;

use super::convert::{optional_string, parse_date, quote_to_proto, timestamp};

pub struct OrderServiceImpl {
    orders: QuoteToOrder,
}

impl OrderServiceImpl {
    pub fn new(orders: QuoteToOrder) -> Self {
        Self { orders }
    }

    fn order_to_proto(order: &Order) -> pb::Order {
        pb::Order {
            id: order.id,
            user_id: order.user_id.clone(),
            quote_id: order.quote_id,
            origin_street: order.origin_street.clone(),
            destination_street: order.destination_street.clone(),
            earliest_pickup: order.earliest_pickup.to_string(),
            latest_pickup: order.latest_pickup.to_string(),
            notes: order.notes.clone().unwrap_or_default(),
            status: order.status.to_string(),
            cancellation_reason: order.cancellation_reason.clone().unwrap_or_default(),
            created_at: timestamp(&order.created_at),
        }
    }

    fn view_to_proto(view: &OrderWithQuote) -> pb::OrderWithQuote {
        let state = QuoteState::of(&view.quote, Some(&view.order));
        pb::OrderWithQuote {
            order: Some(Self::order_to_proto(&view.order)),
            quote: Some(quote_to_proto(&view.quote, state.as_str())),
        }
    }

    fn order_response(view: &OrderWithQuote) -> Response<OrderResponse> {
        Response::new(OrderResponse {
            order: Some(Self::view_to_proto(view)),
        })
    }
}

#[tonic::async_trait]
impl OrderService for OrderServiceImpl {
    async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let draft = OrderDraft {
            origin_street: req.origin_street,
            destination_street: req.destination_street,
            earliest_pickup: parse_date("earliest_pickup", &req.earliest_pickup)?,
            latest_pickup: parse_date("latest_pickup", &req.latest_pickup)?,
            notes: optional_string(req.notes),
        };

        let view = self.orders.create_order(&user, req.quote_id, draft).await?;
        Ok(Self::order_response(&view))
    }

    async fn complete_order(
        &self,
        request: Request<OrderIdRequest>,
    ) -> Result<Response<CompleteOrderResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let order_id = request.into_inner().order_id;
        let completed = self.orders.complete_order(&user, order_id).await?;
        Ok(Response::new(CompleteOrderResponse {
            order: Some(Self::view_to_proto(&completed.order)),
            document_id: completed.receipt.id,
            file_path: completed.receipt.file_path,
        }))
    }

    async fn cancel_order(
        &self,
        request: Request<CancelOrderRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let view = self
            .orders
            .cancel_order(&user, req.order_id, &req.reason)
            .await?;
        Ok(Self::order_response(&view))
    }

    async fn get_order(
        &self,
        request: Request<OrderIdRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let order_id = request.into_inner().order_id;
        let view = self.orders.get_order(&user, order_id).await?;
        Ok(Self::order_response(&view))
    }

    async fn list_orders(
        &self,
        request: Request<ListOrdersRequest>,
    ) -> Result<Response<ListOrdersResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let status = match optional_string(request.into_inner().status) {
            Some(s) => Some(s.parse::<OrderStatus>()?),
            None => None,
        };
        let orders = self.orders.list_orders(&user, status).await?;
        Ok(Response::new(ListOrdersResponse {
            orders: orders.iter().map(Self::view_to_proto).collect(),
        }))
    }

    async fn get_order_summary(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<OrderSummaryResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let summary = self.orders.order_summary(&user).await?;
        Ok(Response::new(OrderSummaryResponse {
            quotes_requested: summary.quotes_requested,
            quotes_priced: summary.quotes_priced,
            quotes_archived: summary.quotes_archived,
            orders_pending: summary.orders_pending,
            orders_completed: summary.orders_completed,
            orders_cancelled: summary.orders_cancelled,
            completed_revenue: summary.completed_revenue,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryRecordStore;
    use crate::middleware::AuthenticatedUser;
    use crate::storage::MemoryBackend;
    use crate::workflows::testing::{quote_draft, recording_outbox};
    use crate::workflows::NotificationDispatcher;
    use std::sync::Arc;

    fn authed<T>(message: T, user: AuthenticatedUser) -> Request<T> {
        let mut request = Request::new(message);
        request.extensions_mut().insert(user);
        request
    }

    #[tokio::test]
    async fn test_create_order_over_grpc() {
        let store = Arc::new(MemoryRecordStore::new());
        let (outbox, _sent) = recording_outbox();
        let workflow = QuoteToOrder::new(
            store.clone(),
            Arc::new(MemoryBackend::new("freight-files")),
            NotificationDispatcher::new(store, outbox),
        );
        let alice = AuthenticatedUser::new("alice");
        let quote = workflow.request_quote(&alice, quote_draft()).await.unwrap();
        let svc = OrderServiceImpl::new(workflow.clone());

        let create = |earliest: &str| CreateOrderRequest {
            quote_id: quote.id,
            origin_street: "1 Dock Rd".to_string(),
            destination_street: "9 Yard Ave".to_string(),
            earliest_pickup: earliest.to_string(),
            latest_pickup: "2026-10-22".to_string(),
            notes: String::new(),
        };

        let status = svc
            .create_order(authed(create("2026-10-20"), alice.clone()))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::FailedPrecondition);

        workflow
            .set_quote_price(&AuthenticatedUser::admin("root"), quote.id, 500.0)
            .await
            .unwrap();

        let status = svc
            .create_order(authed(create("10/20/2026"), alice.clone()))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let response = svc
            .create_order(authed(create("2026-10-20"), alice.clone()))
            .await
            .unwrap()
            .into_inner()
            .order
            .unwrap();
        let order = response.order.unwrap();
        assert_eq!(order.status, "pending");
        assert_eq!(response.quote.unwrap().state, "order_created");

        let listed = svc
            .list_orders(authed(
                ListOrdersRequest {
                    status: "completed".to_string(),
                },
                alice,
            ))
            .await
            .unwrap()
            .into_inner();
        assert!(listed.orders.is_empty());
    }
}
