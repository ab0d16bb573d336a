use campsite::{
    domain::{UnsubscribeId, User, UserEmail},
    store::{PostgresUserStore, UserStore},
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::helper::connect_random_database;

async fn insert_user(pool: &PgPool, email: Option<&str>, unsubscribe_id: &str) -> User {
    let user = User {
        id: Uuid::new_v4(),
        email: email.map(Into::into),
        unsubscribe_id: unsubscribe_id.into(),
        send_quincy_email: true,
    };
    sqlx::query(
        r#"
        INSERT INTO users (id, email, unsubscribe_id, send_quincy_email)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.unsubscribe_id)
    .bind(user.send_quincy_email)
    .execute(pool)
    .await
    .expect("failed to insert user.");

    user
}

#[tokio::test]
async fn find_by_unsubscribe_id() {
    let Some(pool) = connect_random_database().await else {
        return;
    };
    let store = PostgresUserStore::new(pool.clone());
    let camper = insert_user(&pool, Some("test@example.com"), "507f1f77bcf86cd799439011").await;

    let id = UnsubscribeId::parse("507f1f77bcf86cd799439011").unwrap();
    assert_eq!(store.find_by_unsubscribe_id(&id).await.unwrap(), Some(camper));

    let id = UnsubscribeId::parse("507f1f77bcf86cd799439099").unwrap();
    assert_eq!(store.find_by_unsubscribe_id(&id).await.unwrap(), None);
}

#[tokio::test]
async fn find_by_email_matches_every_user_case_sensitively() {
    let Some(pool) = connect_random_database().await else {
        return;
    };
    let store = PostgresUserStore::new(pool.clone());
    let first = insert_user(&pool, Some("test@example.com"), "507f1f77bcf86cd799439011").await;
    let second = insert_user(&pool, Some("test@example.com"), "507f1f77bcf86cd799439012").await;
    insert_user(&pool, Some("Test@Example.com"), "507f1f77bcf86cd799439013").await;
    insert_user(&pool, None, "507f1f77bcf86cd799439014").await;

    let email = UserEmail::parse("test@example.com").unwrap();
    let mut ids: Vec<Uuid> = store
        .find_by_email(&email)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    ids.sort();
    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);

    let email = UserEmail::parse("nobody@example.com").unwrap();
    assert!(store.find_by_email(&email).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_only_touches_the_flag_and_reload_sees_it() {
    let Some(pool) = connect_random_database().await else {
        return;
    };
    let store = PostgresUserStore::new(pool.clone());
    let camper = insert_user(&pool, Some("test@example.com"), "507f1f77bcf86cd799439011").await;
    let other = insert_user(&pool, Some("other@example.com"), "507f1f77bcf86cd799439012").await;

    store
        .update_send_quincy_email(camper.id, false)
        .await
        .unwrap();

    let reloaded = store.reload(camper.id).await.unwrap();
    assert_eq!(
        reloaded,
        Some(User {
            send_quincy_email: false,
            ..camper.clone()
        })
    );
    assert_eq!(store.reload(other.id).await.unwrap(), Some(other));

    // 重复更新结果不变
    store
        .update_send_quincy_email(camper.id, false)
        .await
        .unwrap();
    assert!(!store.reload(camper.id).await.unwrap().unwrap().send_quincy_email);
}

#[tokio::test]
async fn reload_unknown_user_is_none() {
    let Some(pool) = connect_random_database().await else {
        return;
    };
    let store = PostgresUserStore::new(pool);

    assert_eq!(store.reload(Uuid::new_v4()).await.unwrap(), None);
}
