//! Comment entity <-> model mapper

use dubhub_core::entities::Comment;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            author_id: model.author_id,
            body: model.body,
            artist_tag: model.artist_tag,
            created_at: model.created_at,
        }
    }
}
