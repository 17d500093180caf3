use tonic::{Request, Response, Status};

use crate::middleware::get_authenticated_user;
use crate::models::{FreightClass, QuoteDraft};
use crate::proto::quotes::quote_service_server::QuoteService;
use crate::proto::quotes::{
    self as pb, AcknowledgeUrgentResponse, ListQuotesRequest, ListQuotesResponse,
    QuoteIdRequest, QuoteResponse, RequestQuoteRequest, SetQuotePriceRequest,
};
use crate::workflows::{QuoteToOrder, QuoteView};

use super::convert::{
    location_from_proto, optional_string, parse_date, quote_to_proto, quote_view_to_proto,
};

pub struct QuoteServiceImpl {
    orders: QuoteToOrder,
}

impl QuoteServiceImpl {
    pub fn new(orders: QuoteToOrder) -> Self {
        Self { orders }
    }

    fn draft_from_proto(draft: pb::QuoteDraft) -> Result<QuoteDraft, Status> {
        let classification = match optional_string(draft.classification) {
            Some(c) => c.parse()?,
            None => FreightClass::default(),
        };
        Ok(QuoteDraft {
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: optional_string(draft.phone),
            company: optional_string(draft.company),
            origin: location_from_proto(draft.origin),
            destination: location_from_proto(draft.destination),
            freight_description: optional_string(draft.freight_description),
            classification,
            pallet_count: draft.pallet_count,
            weight: draft.weight,
            due_date: parse_date("due_date", &draft.due_date)?,
        })
    }

    fn quote_response(view: &QuoteView) -> Response<QuoteResponse> {
        Response::new(QuoteResponse {
            quote: Some(quote_view_to_proto(view)),
        })
    }
}

#[tonic::async_trait]
impl QuoteService for QuoteServiceImpl {
    async fn request_quote(
        &self,
        request: Request<RequestQuoteRequest>,
    ) -> Result<Response<QuoteResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let draft = request
            .into_inner()
            .draft
            .ok_or_else(|| Status::invalid_argument("draft is required"))?;

        let quote = self
            .orders
            .request_quote(&user, Self::draft_from_proto(draft)?)
            .await?;
        Ok(Response::new(QuoteResponse {
            quote: Some(quote_to_proto(&quote, "requested")),
        }))
    }

    async fn set_quote_price(
        &self,
        request: Request<SetQuotePriceRequest>,
    ) -> Result<Response<QuoteResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let view = self
            .orders
            .set_quote_price(&user, req.quote_id, req.price)
            .await?;
        Ok(Self::quote_response(&view))
    }

    async fn acknowledge_urgent(
        &self,
        request: Request<QuoteIdRequest>,
    ) -> Result<Response<AcknowledgeUrgentResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let quote_id = request.into_inner().quote_id;
        let message = self.orders.acknowledge_urgent(&user, quote_id).await?;
        Ok(Response::new(AcknowledgeUrgentResponse { message }))
    }

    async fn archive_quote(
        &self,
        request: Request<QuoteIdRequest>,
    ) -> Result<Response<QuoteResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let quote_id = request.into_inner().quote_id;
        let view = self.orders.archive_quote(&user, quote_id).await?;
        Ok(Self::quote_response(&view))
    }

    async fn list_quotes(
        &self,
        request: Request<ListQuotesRequest>,
    ) -> Result<Response<ListQuotesResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let quotes = self
            .orders
            .list_quotes(&user, req.include_archived, req.pending_only)
            .await?;
        Ok(Response::new(ListQuotesResponse {
            quotes: quotes.iter().map(quote_view_to_proto).collect(),
        }))
    }

    async fn get_quote(
        &self,
        request: Request<QuoteIdRequest>,
    ) -> Result<Response<QuoteResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let quote_id = request.into_inner().quote_id;
        let view = self.orders.get_quote(&user, quote_id).await?;
        Ok(Self::quote_response(&view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(city: &str) -> Option<pb::Location> {
        Some(pb::Location {
            street: String::new(),
            city: city.to_string(),
            state: "CO".to_string(),
            zip: "80202".to_string(),
        })
    }

    fn draft() -> pb::QuoteDraft {
        pb::QuoteDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            origin: location("Denver"),
            destination: location("Boulder"),
            due_date: "2026-11-01".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_defaults_classification() {
        let converted = QuoteServiceImpl::draft_from_proto(draft()).unwrap();
        assert_eq!(converted.classification, FreightClass::Equipment);
        assert_eq!(converted.origin.street, None);
        assert_eq!(converted.due_date.to_string(), "2026-11-01");
    }

    #[test]
    fn test_draft_rejects_bad_due_date() {
        let mut bad = draft();
        bad.due_date = "soon".to_string();
        let status = QuoteServiceImpl::draft_from_proto(bad).unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }
}
