use sea_orm::{QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    accounts::{self, Account},
    commands::AccountCmd,
};

use super::{Engine, normalize_required_text};

impl Engine {
    pub async fn create_account(&self, cmd: AccountCmd) -> ResultEngine<Uuid> {
        let name = normalize_required_text(&cmd.name, "account name")?;
        let code = normalize_required_text(&cmd.code, "account code")?;

        let existing = accounts::Entity::find()
            .filter(accounts::Column::Code.eq(code.clone()))
            .one(&self.database)
            .await?;
        if existing.is_some() {
            return Err(EngineError::Conflict(code));
        }

        let mut account = Account::new(name, code, cmd.account_type);
        account.is_cash_account = cmd.is_cash_account;
        account.is_bank_account = cmd.is_bank_account;
        account.opening_balance_minor = cmd.opening_balance_minor;
        account.current_balance_minor = cmd.opening_balance_minor;
        accounts::ActiveModel::from(&account)
            .insert(&self.database)
            .await?;
        Ok(account.id)
    }

    pub async fn account(&self, account_id: Uuid) -> ResultEngine<Account> {
        let model = accounts::Entity::find_by_id(account_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound("account not exists".to_string()))?;
        Account::try_from(model)
    }

    pub async fn list_accounts(&self) -> ResultEngine<Vec<Account>> {
        let models = accounts::Entity::find()
            .filter(accounts::Column::IsActive.eq(true))
            .order_by_asc(accounts::Column::Code)
            .all(&self.database)
            .await?;
        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(Account::try_from(model)?);
        }
        Ok(out)
    }

    /// The flagged cash account, used by the app at startup to configure the
    /// engine when settings carry no explicit override.
    pub async fn find_cash_account(&self) -> ResultEngine<Option<Account>> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::IsCashAccount.eq(true))
            .filter(accounts::Column::IsActive.eq(true))
            .one(&self.database)
            .await?;
        model.map(Account::try_from).transpose()
    }
}
