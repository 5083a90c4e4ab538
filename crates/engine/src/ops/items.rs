use sea_orm::{QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    commands::ItemCmd,
    items::{self, Item},
};

use super::{Engine, normalize_required_text};

impl Engine {
    pub async fn create_item(&self, cmd: ItemCmd) -> ResultEngine<Uuid> {
        let name = normalize_required_text(&cmd.name, "item name")?;
        let code = normalize_required_text(&cmd.code, "item code")?;
        if cmd.opening_stock < 0 {
            return Err(EngineError::Validation(
                "stock cannot be negative".to_string(),
            ));
        }

        let existing = items::Entity::find()
            .filter(items::Column::Code.eq(code.clone()))
            .one(&self.database)
            .await?;
        if existing.is_some() {
            return Err(EngineError::Conflict(code));
        }

        let mut item = Item::new(name, code, cmd.unit);
        item.item_type = cmd.item_type;
        item.current_stock = cmd.opening_stock;
        item.reorder_level = cmd.reorder_level;
        item.purchase_rate_minor = cmd.purchase_rate_minor;
        item.selling_rate_minor = cmd.selling_rate_minor;
        items::ActiveModel::from(&item).insert(&self.database).await?;
        Ok(item.id)
    }

    pub async fn item(&self, item_id: Uuid) -> ResultEngine<Item> {
        let model = items::Entity::find_by_id(item_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound("item not exists".to_string()))?;
        Item::try_from(model)
    }

    pub async fn list_items(&self) -> ResultEngine<Vec<Item>> {
        let models = items::Entity::find()
            .filter(items::Column::IsActive.eq(true))
            .order_by_asc(items::Column::Name)
            .all(&self.database)
            .await?;
        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(Item::try_from(model)?);
        }
        Ok(out)
    }
}
