use tonic::{Request, Response, Status};

use crate::middleware::get_authenticated_user;
use crate::models::Notification;
use crate::proto::notifications::notification_service_server::NotificationService;
use crate::proto::notifications::{
    self as pb, ListNotificationsRequest, ListNotificationsResponse, MarkAsReadRequest,
    NotificationResponse,
};
use crate::workflows::NotificationDispatcher;

use super::convert::timestamp;

pub struct NotificationServiceImpl {
    notifications: NotificationDispatcher,
}

impl NotificationServiceImpl {
    pub fn new(notifications: NotificationDispatcher) -> Self {
        Self { notifications }
    }

    fn model_to_proto(notification: &Notification) -> pb::Notification {
        pb::Notification {
            id: notification.id,
            user_id: notification.user_id.clone(),
            message: notification.message.clone(),
            is_read: notification.is_read,
            created_at: timestamp(&notification.created_at),
        }
    }
}

#[tonic::async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn list_notifications(
        &self,
        request: Request<ListNotificationsRequest>,
    ) -> Result<Response<ListNotificationsResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let unread_only = request.into_inner().unread_only;
        let notifications = self
            .notifications
            .list_notifications(&user, unread_only)
            .await?;
        Ok(Response::new(ListNotificationsResponse {
            notifications: notifications.iter().map(Self::model_to_proto).collect(),
        }))
    }

    async fn mark_as_read(
        &self,
        request: Request<MarkAsReadRequest>,
    ) -> Result<Response<NotificationResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let id = request.into_inner().id;
        let notification = self.notifications.mark_as_read(&user, id).await?;
        Ok(Response::new(NotificationResponse {
            notification: Some(Self::model_to_proto(&notification)),
        }))
    }
}
