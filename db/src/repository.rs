use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, Select,
};
use std::marker::PhantomData;

/// Generic store over any SeaORM entity.
///
/// Every operation takes the connection explicitly so the same code runs
/// against a pooled `DatabaseConnection` or inside a `DatabaseTransaction`.
pub struct Repository<E> {
    _phantom: PhantomData<E>,
}

impl<E> Repository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// `SELECT` over the whole table, ordered by primary key.
    fn ordered() -> Select<E> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        query
    }

    /// Returns `true` when the table holds at least one row.
    pub async fn exists_any<C: ConnectionTrait>(conn: &C) -> Result<bool, DbErr> {
        Ok(E::find().one(conn).await?.is_some())
    }

    /// Inserts one row and returns it as stored, including its generated id.
    pub async fn insert<C: ConnectionTrait>(
        conn: &C,
        active_model: E::ActiveModel,
    ) -> Result<E::Model, DbErr> {
        active_model.insert(conn).await
    }

    /// Inserts rows in order and returns them as stored.
    ///
    /// Stops at the first failure; wrap the call in a transaction when the
    /// batch must be all-or-nothing.
    pub async fn insert_many<C: ConnectionTrait>(
        conn: &C,
        active_models: Vec<E::ActiveModel>,
    ) -> Result<Vec<E::Model>, DbErr> {
        let mut inserted = Vec::with_capacity(active_models.len());
        for active_model in active_models {
            inserted.push(active_model.insert(conn).await?);
        }
        Ok(inserted)
    }

    pub async fn list_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<E::Model>, DbErr> {
        Self::ordered().all(conn).await
    }

    pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        E::find().count(conn).await
    }

    pub async fn find_by_id<C, K>(conn: &C, id: K) -> Result<Option<E::Model>, DbErr>
    where
        C: ConnectionTrait,
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(conn).await
    }

    /// One page of rows plus the total row count. `page` is 1-based.
    pub async fn page<C: ConnectionTrait>(
        conn: &C,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<E::Model>, u64), DbErr> {
        let paginator = Self::ordered().paginate(conn, per_page.max(1));
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::Repository;
    use crate::models::{group, role};
    use crate::test_utils::setup_test_db;
    use chrono::Utc;
    use sea_orm::{ActiveValue::Set, TransactionTrait};

    fn role_row(name: &str) -> role::ActiveModel {
        role::ActiveModel {
            name: Set(name.to_string()),
            description: Set(Some(format!("{name} role"))),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn empty_table_reports_no_rows() {
        let db = setup_test_db().await;

        assert!(!Repository::<role::Entity>::exists_any(&db).await.unwrap());
        assert_eq!(Repository::<role::Entity>::count(&db).await.unwrap(), 0);
        assert!(Repository::<role::Entity>::list_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_many_returns_rows_with_ids() {
        let db = setup_test_db().await;

        let inserted = Repository::<role::Entity>::insert_many(
            &db,
            vec![role_row("Admin"), role_row("Teacher"), role_row("Student")],
        )
        .await
        .unwrap();

        assert_eq!(inserted.len(), 3);
        assert!(inserted.iter().all(|r| r.id > 0));
        assert!(Repository::<role::Entity>::exists_any(&db).await.unwrap());

        let listed = Repository::<role::Entity>::list_all(&db).await.unwrap();
        let names: Vec<_> = listed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Admin", "Teacher", "Student"]);

        let found = Repository::<role::Entity>::find_by_id(&db, inserted[1].id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Teacher");
    }

    #[tokio::test]
    async fn duplicate_unique_name_is_rejected() {
        let db = setup_test_db().await;

        Repository::<role::Entity>::insert(&db, role_row("Admin")).await.unwrap();
        let err = Repository::<role::Entity>::insert(&db, role_row("Admin")).await;
        assert!(err.is_err());
        assert_eq!(Repository::<role::Entity>::count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn page_returns_slice_and_total() {
        let db = setup_test_db().await;

        let rows = (0..7)
            .map(|i| group::ActiveModel {
                name: Set(format!("Group {i}")),
                code: Set(format!("{i:04}")),
                description: Set(None),
                created_at: Set(Utc::now()),
                updated_at: Set(Utc::now()),
                ..Default::default()
            })
            .collect();
        Repository::<group::Entity>::insert_many(&db, rows).await.unwrap();

        let (items, total) = Repository::<group::Entity>::page(&db, 2, 3).await.unwrap();
        assert_eq!(total, 7);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Group 3");

        let (last, _) = Repository::<group::Entity>::page(&db, 3, 3).await.unwrap();
        assert_eq!(last.len(), 1);
    }

    #[tokio::test]
    async fn rolled_back_transaction_leaves_no_rows() {
        let db = setup_test_db().await;

        let txn = db.begin().await.unwrap();
        Repository::<role::Entity>::insert(&txn, role_row("Admin")).await.unwrap();
        assert!(Repository::<role::Entity>::exists_any(&txn).await.unwrap());
        txn.rollback().await.unwrap();

        assert!(!Repository::<role::Entity>::exists_any(&db).await.unwrap());
    }
}
