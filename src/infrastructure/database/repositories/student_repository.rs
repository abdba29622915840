use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};

use crate::domain::{
    CreateStudentDto, DomainError, DomainResult, Student, StudentRepositoryInterface,
};
use crate::infrastructure::database::entities::student;

/// SeaORM-backed student repository.
///
/// Mutating operations run inside an explicit transaction: committed on
/// success, rolled back on every error path when the uncommitted
/// transaction is dropped. Reads are single statements.
pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn student_model_to_domain(model: student::Model) -> Student {
    Student {
        id: model.id,
        uuid: model.uuid,
        name: model.name,
        email_address: model.email_address,
        created_at: model.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl StudentRepositoryInterface for SeaOrmStudentRepository {
    async fn find_all(&self) -> DomainResult<Vec<Student>> {
        // No ORDER BY: callers get storage-defined order.
        let models = student::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(student_model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Student>> {
        let model = student::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(student_model_to_domain))
    }

    async fn find_by_uuid(&self, uuid: &str) -> DomainResult<Option<Student>> {
        let model = student::Entity::find()
            .filter(student::Column::Uuid.eq(uuid))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(student_model_to_domain))
    }

    async fn find_by_email_address(&self, email_address: &str) -> DomainResult<Option<Student>> {
        let model = student::Entity::find()
            .filter(student::Column::EmailAddress.eq(email_address))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(student_model_to_domain))
    }

    async fn save_and_flush(&self, dto: CreateStudentDto) -> DomainResult<Student> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let new_student = student::ActiveModel {
            id: NotSet,
            uuid: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(dto.name),
            email_address: Set(dto.email_address),
            created_at: Set(Utc::now()),
        };

        let model = new_student.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(student_model_to_domain(model))
    }

    async fn delete(&self, student: &Student) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        student::Entity::delete_by_id(student.id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;

    use crate::infrastructure::database::migrator::Migrator;

    async fn repo() -> SeaOrmStudentRepository {
        // Single connection: pooled in-memory SQLite connections do not
        // share a database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options)
            .await
            .expect("connect to in-memory sqlite");
        Migrator::fresh(&db).await.expect("run migrations");
        SeaOrmStudentRepository::new(db)
    }

    fn dto(name: &str, email: &str) -> CreateStudentDto {
        CreateStudentDto {
            name: name.to_string(),
            email_address: email.to_string(),
        }
    }

    #[tokio::test]
    async fn save_assigns_id_and_uuid() {
        let repo = repo().await;

        let a = repo.save_and_flush(dto("Alice", "alice@example.com")).await.unwrap();
        let b = repo.save_and_flush(dto("Bob", "bob@example.com")).await.unwrap();

        assert!(a.id > 0);
        assert!(!a.uuid.is_empty());
        assert_ne!(a.id, b.id);
        assert_ne!(a.uuid, b.uuid);
        assert_eq!(a.name, "Alice");
        assert_eq!(a.email_address, "alice@example.com");
    }

    #[tokio::test]
    async fn each_lookup_finds_the_saved_row() {
        let repo = repo().await;
        let saved = repo.save_and_flush(dto("Alice", "alice@example.com")).await.unwrap();

        let by_id = repo.find_by_id(saved.id).await.unwrap().unwrap();
        let by_uuid = repo.find_by_uuid(&saved.uuid).await.unwrap().unwrap();
        let by_email = repo
            .find_by_email_address(&saved.email_address)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(by_id.uuid, saved.uuid);
        assert_eq!(by_uuid.id, saved.id);
        assert_eq!(by_email.uuid, saved.uuid);
    }

    #[tokio::test]
    async fn unknown_keys_come_back_absent() {
        let repo = repo().await;

        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
        assert_eq!(repo.find_by_uuid("no-such-uuid").await.unwrap(), None);
        assert_eq!(
            repo.find_by_email_address("nobody@example.com").await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let repo = repo().await;
        let saved = repo.save_and_flush(dto("Alice", "alice@example.com")).await.unwrap();

        repo.delete(&saved).await.unwrap();

        assert_eq!(repo.find_by_uuid(&saved.uuid).await.unwrap(), None);
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
