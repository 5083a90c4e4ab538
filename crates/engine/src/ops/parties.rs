//! Customer, supplier and mazdoor registries.

use sea_orm::{QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    commands::{CustomerCmd, MazdoorCmd, SupplierCmd},
    customers::{self, Customer},
    mazdoors::{self, Mazdoor},
    suppliers::{self, Supplier},
};

use super::{Engine, normalize_required_text};

impl Engine {
    pub async fn create_customer(&self, cmd: CustomerCmd) -> ResultEngine<Uuid> {
        let name = normalize_required_text(&cmd.name, "customer name")?;
        let mut customer = Customer::new(name);
        customer.phone = cmd.phone;
        customer.address = cmd.address;
        customer.opening_balance_minor = cmd.opening_balance_minor;
        customer.current_balance_minor = cmd.opening_balance_minor;
        customers::ActiveModel::from(&customer)
            .insert(&self.database)
            .await?;
        Ok(customer.id)
    }

    pub async fn customer(&self, customer_id: Uuid) -> ResultEngine<Customer> {
        let model = customers::Entity::find_by_id(customer_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound("customer not exists".to_string()))?;
        Customer::try_from(model)
    }

    pub async fn list_customers(&self) -> ResultEngine<Vec<Customer>> {
        let models = customers::Entity::find()
            .filter(customers::Column::IsActive.eq(true))
            .order_by_asc(customers::Column::Name)
            .all(&self.database)
            .await?;
        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(Customer::try_from(model)?);
        }
        Ok(out)
    }

    pub async fn create_supplier(&self, cmd: SupplierCmd) -> ResultEngine<Uuid> {
        let name = normalize_required_text(&cmd.name, "supplier name")?;
        let mut supplier = Supplier::new(name);
        supplier.phone = cmd.phone;
        supplier.address = cmd.address;
        supplier.opening_balance_minor = cmd.opening_balance_minor;
        supplier.current_balance_minor = cmd.opening_balance_minor;
        suppliers::ActiveModel::from(&supplier)
            .insert(&self.database)
            .await?;
        Ok(supplier.id)
    }

    pub async fn supplier(&self, supplier_id: Uuid) -> ResultEngine<Supplier> {
        let model = suppliers::Entity::find_by_id(supplier_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound("supplier not exists".to_string()))?;
        Supplier::try_from(model)
    }

    pub async fn list_suppliers(&self) -> ResultEngine<Vec<Supplier>> {
        let models = suppliers::Entity::find()
            .filter(suppliers::Column::IsActive.eq(true))
            .order_by_asc(suppliers::Column::Name)
            .all(&self.database)
            .await?;
        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(Supplier::try_from(model)?);
        }
        Ok(out)
    }

    pub async fn create_mazdoor(&self, cmd: MazdoorCmd) -> ResultEngine<Uuid> {
        let name = normalize_required_text(&cmd.name, "mazdoor name")?;
        let mut mazdoor = Mazdoor::new(name);
        mazdoor.phone = cmd.phone;
        mazdoor.daily_wage_minor = cmd.daily_wage_minor;
        mazdoors::ActiveModel::from(&mazdoor)
            .insert(&self.database)
            .await?;
        Ok(mazdoor.id)
    }

    pub async fn mazdoor(&self, mazdoor_id: Uuid) -> ResultEngine<Mazdoor> {
        let model = mazdoors::Entity::find_by_id(mazdoor_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound("mazdoor not exists".to_string()))?;
        Mazdoor::try_from(model)
    }

    pub async fn list_mazdoors(&self) -> ResultEngine<Vec<Mazdoor>> {
        let models = mazdoors::Entity::find()
            .filter(mazdoors::Column::IsActive.eq(true))
            .order_by_asc(mazdoors::Column::Name)
            .all(&self.database)
            .await?;
        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(Mazdoor::try_from(model)?);
        }
        Ok(out)
    }
}
