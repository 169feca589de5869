use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Blog, NewBlog, UpdateBlog};

/// Sea-ORM Entity for the `blog` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    pub is_published: bool,
    #[sea_orm(column_type = "Text")]
    pub featured_image: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Blog {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            category: model.category,
            is_published: model.is_published,
            featured_image: model.featured_image,
            created_at: model.created_at.into(),
        }
    }
}

// id and created_at are left to the column defaults
impl From<NewBlog> for ActiveModel {
    fn from(input: NewBlog) -> Self {
        ActiveModel {
            id: NotSet,
            title: Set(input.title),
            content: Set(input.content),
            category: Set(input.category),
            is_published: Set(input.is_published),
            featured_image: Set(input.featured_image),
            created_at: NotSet,
        }
    }
}

impl From<UpdateBlog> for ActiveModel {
    fn from(input: UpdateBlog) -> Self {
        ActiveModel {
            id: NotSet,
            title: Set(input.title),
            content: Set(input.content),
            category: Set(input.category),
            is_published: Set(input.is_published),
            featured_image: Set(input.featured_image),
            created_at: NotSet,
        }
    }
}
