use crate::entities::{prelude::*, products};
use crate::models::product::ProductInput;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, sea_query::Expr,
};
use tracing::debug;

/// Single-statement access to the `products` table.
pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<products::Model>, DbErr> {
        Products::find()
            .order_by_asc(products::Column::Id)
            .all(&self.conn)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<products::Model>, DbErr> {
        Products::find_by_id(id).one(&self.conn).await
    }

    pub async fn insert(&self, input: ProductInput) -> Result<products::Model, DbErr> {
        let active_model = products::ActiveModel {
            name: Set(input.name),
            season: Set(input.season),
            image_url: Set(input.image_url),
            eng_description: Set(input.eng_description),
            thai_description: Set(input.thai_description),
            short_description: Set(input.short_description),
            price: Set(input.price),
            caution: Set(input.caution),
            source: Set(input.source),
            ..Default::default()
        };

        let model = active_model.insert(&self.conn).await?;
        debug!(id = model.id, "Inserted product");
        Ok(model)
    }

    /// Overwrites every mutable column of row `id`. Returns rows affected.
    pub async fn overwrite(&self, id: i32, input: ProductInput) -> Result<u64, DbErr> {
        let result = Products::update_many()
            .col_expr(products::Column::Name, Expr::value(input.name))
            .col_expr(products::Column::Season, Expr::value(input.season))
            .col_expr(products::Column::ImageUrl, Expr::value(input.image_url))
            .col_expr(
                products::Column::EngDescription,
                Expr::value(input.eng_description),
            )
            .col_expr(
                products::Column::ThaiDescription,
                Expr::value(input.thai_description),
            )
            .col_expr(
                products::Column::ShortDescription,
                Expr::value(input.short_description),
            )
            .col_expr(products::Column::Price, Expr::value(input.price))
            .col_expr(products::Column::Caution, Expr::value(input.caution))
            .col_expr(products::Column::Source, Expr::value(input.source))
            .filter(products::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn remove(&self, id: i32) -> Result<u64, DbErr> {
        let result = Products::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected)
    }
}
