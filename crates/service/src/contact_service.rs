use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info, instrument};

use models::{contact, user};
use crate::domain::contact::{ContactResponse, CreateContactRequest, SearchContactRequest, UpdateContactRequest};
use crate::errors::ServiceError;
use crate::pagination::Page;
use crate::validation::validate;

/// Load contact `id` owned by `username`, or 404 `Contact not found`.
pub async fn check_contact_must_exist(
    db: &DatabaseConnection,
    username: &str,
    id: i32,
) -> Result<contact::Model, ServiceError> {
    contact::find_owned(db, username, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Contact"))
}

#[instrument(skip(db, user, req), fields(username = %user.username))]
pub async fn create(db: &DatabaseConnection, user: &user::Model, req: CreateContactRequest) -> Result<ContactResponse, ServiceError> {
    validate(&req)?;
    let am = contact::ActiveModel {
        username: Set(user.username.clone()),
        first_name: Set(req.first_name),
        last_name: Set(req.last_name),
        email: Set(req.email),
        phone: Set(req.phone),
        ..Default::default()
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(contact_id = created.id, "contact_created");
    Ok(created.into())
}

pub async fn get(db: &DatabaseConnection, user: &user::Model, id: i32) -> Result<ContactResponse, ServiceError> {
    Ok(check_contact_must_exist(db, &user.username, id).await?.into())
}

/// Partial replace: fields left as `None` keep their stored value.
#[instrument(skip(db, user, req), fields(username = %user.username, contact_id = req.id))]
pub async fn update(db: &DatabaseConnection, user: &user::Model, req: UpdateContactRequest) -> Result<ContactResponse, ServiceError> {
    validate(&req)?;
    let existing = check_contact_must_exist(db, &user.username, req.id).await?;
    let mut am: contact::ActiveModel = existing.into();
    if let Some(first_name) = req.first_name {
        am.first_name = Set(first_name);
    }
    if let Some(last_name) = req.last_name {
        am.last_name = Set(Some(last_name));
    }
    if let Some(email) = req.email {
        am.email = Set(Some(email));
    }
    if let Some(phone) = req.phone {
        am.phone = Set(Some(phone));
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(contact_id = updated.id, "contact_updated");
    Ok(updated.into())
}

#[instrument(skip(db, user), fields(username = %user.username))]
pub async fn remove(db: &DatabaseConnection, user: &user::Model, id: i32) -> Result<&'static str, ServiceError> {
    let existing = check_contact_must_exist(db, &user.username, id).await?;
    contact::Entity::delete_by_id(existing.id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(contact_id = id, "contact_removed");
    Ok("OK")
}

/// Filtered, paged listing of the caller's contacts ordered by id.
#[instrument(skip(db, user, req), fields(username = %user.username))]
pub async fn search(db: &DatabaseConnection, user: &user::Model, req: SearchContactRequest) -> Result<Page<ContactResponse>, ServiceError> {
    validate(&req)?;
    let backend = db.get_database_backend();
    let mut cond = Condition::all().add(contact::Column::Username.eq(user.username.as_str()));
    if let Some(name) = non_blank(&req.name) {
        cond = cond.add(
            Condition::any()
                .add(contains_literal(backend, contact::Column::FirstName, name))
                .add(contains_literal(backend, contact::Column::LastName, name)),
        );
    }
    if let Some(email) = non_blank(&req.email) {
        cond = cond.add(contains_literal(backend, contact::Column::Email, email));
    }
    if let Some(phone) = non_blank(&req.phone) {
        cond = cond.add(contains_literal(backend, contact::Column::Phone, phone));
    }

    let pagination = req.pagination();
    let (page_idx, size) = pagination.normalize();
    let paginator = contact::Entity::find()
        .filter(cond)
        .order_by_asc(contact::Column::Id)
        .paginate(db, size);
    let total = paginator.num_items().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let rows = paginator.fetch_page(page_idx).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(total, returned = rows.len(), "contact_search");

    Ok(Page {
        data: rows.into_iter().map(ContactResponse::from).collect(),
        paging: pagination.paging(total),
    })
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Case-sensitive substring test with no wildcard characters: `needle`
/// matches only itself, so `%` and `_` are literal. NULL columns never match.
fn contains_literal(backend: DbBackend, column: contact::Column, needle: &str) -> SimpleExpr {
    let position = match backend {
        DbBackend::Postgres => "strpos",
        _ => "instr",
    };
    Expr::expr(
        Func::cust(Alias::new(position))
            .arg(Expr::col((contact::Entity, column)))
            .arg(Expr::val(needle)),
    )
    .gt(0)
}
