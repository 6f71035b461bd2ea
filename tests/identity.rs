// tests/identity.rs
use conduit_core::application::ApplicationError;
use conduit_core::application::commands::users::{
    LoginUserCommand, RegisterUserCommand, UpdateUserCommand,
};
use conduit_core::domain::errors::Entity;

mod support;

fn registration(username: &str, email: &str, password: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        username: username.into(),
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn register_returns_user_with_working_token() {
    let app = support::test_app();
    let user = app
        .services
        .user_commands
        .register(registration("jake", "jake@jake.jake", "jakejake"))
        .await
        .unwrap();

    assert_eq!(user.username, "jake");
    assert_eq!(user.email, "jake@jake.jake");
    assert_eq!(user.bio, None);
    assert_eq!(user.image, None);

    let actor = app.services.authenticate(&user.token).await.unwrap();
    let current = app.services.user_queries.current_user(&actor).await.unwrap();
    assert_eq!(current.username, "jake");
}

#[tokio::test]
async fn register_reports_every_blank_field() {
    let app = support::test_app();
    let err = app
        .services
        .user_commands
        .register(registration(" ", "", ""))
        .await
        .unwrap_err();

    let ApplicationError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    let mut fields: Vec<&str> = errors.fields().collect();
    fields.sort_unstable();
    assert_eq!(fields, vec!["email", "password", "username"]);
    assert_eq!(errors.get("password"), Some(&["can't be blank".to_string()][..]));
}

#[tokio::test]
async fn duplicate_email_and_username_conflict() {
    let app = support::test_app();
    let users = &app.services.user_commands;
    users
        .register(registration("jake", "jake@jake.jake", "pw"))
        .await
        .unwrap();

    let err = users
        .register(registration("other", "jake@jake.jake", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict { field: "email" }));

    let err = users
        .register(registration("jake", "other@jake.jake", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict { field: "username" }));
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = support::test_app();
    app.register("jake").await;
    let users = &app.services.user_commands;

    let ok = users
        .login(LoginUserCommand {
            email: "jake@example.com".into(),
            password: "secret-jake".into(),
        })
        .await
        .unwrap();
    assert_eq!(ok.username, "jake");

    for (email, password) in [
        ("jake@example.com", "wrong"),
        ("nobody@example.com", "secret-jake"),
        ("not-an-email", "secret-jake"),
    ] {
        let err = users
            .login(LoginUserCommand {
                email: email.into(),
                password: password.into(),
            })
            .await
            .unwrap_err();
        assert!(
            matches!(err, ApplicationError::InvalidCredentials),
            "{email}/{password} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn update_changes_only_present_fields() {
    let app = support::test_app();
    let (_, actor) = app.register("jake").await;
    let users = &app.services.user_commands;

    let updated = users
        .update_user(
            &actor,
            UpdateUserCommand {
                bio: Some(Some("I like to skateboard".into())),
                image: Some(Some("https://i.stack.imgur.com/xHWG8.jpg".into())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.bio.as_deref(), Some("I like to skateboard"));
    assert_eq!(updated.email, "jake@example.com");

    let cleared = users
        .update_user(
            &actor,
            UpdateUserCommand {
                image: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.image, None);
    assert_eq!(cleared.bio.as_deref(), Some("I like to skateboard"));
}

#[tokio::test]
async fn update_password_is_used_by_next_login() {
    let app = support::test_app();
    let (_, actor) = app.register("jake").await;
    let users = &app.services.user_commands;

    users
        .update_user(
            &actor,
            UpdateUserCommand {
                password: Some("brand-new".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let old = users
        .login(LoginUserCommand {
            email: "jake@example.com".into(),
            password: "secret-jake".into(),
        })
        .await;
    assert!(matches!(old, Err(ApplicationError::InvalidCredentials)));

    let new = users
        .login(LoginUserCommand {
            email: "jake@example.com".into(),
            password: "brand-new".into(),
        })
        .await;
    assert!(new.is_ok());
}

#[tokio::test]
async fn update_rejects_taken_values_but_allows_own() {
    let app = support::test_app();
    let (_, jake) = app.register("jake").await;
    app.register("anne").await;
    let users = &app.services.user_commands;

    let err = users
        .update_user(
            &jake,
            UpdateUserCommand {
                username: Some("anne".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict { field: "username" }));

    let same = users
        .update_user(
            &jake,
            UpdateUserCommand {
                email: Some("jake@example.com".into()),
                username: Some("jake".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(same.username, "jake");
}

#[tokio::test]
async fn update_rejects_blank_present_fields() {
    let app = support::test_app();
    let (_, actor) = app.register("jake").await;

    let err = app
        .services
        .user_commands
        .update_user(
            &actor,
            UpdateUserCommand {
                email: Some("   ".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn empty_update_returns_current_user() {
    let app = support::test_app();
    let (_, actor) = app.register("jake").await;

    let user = app
        .services
        .user_commands
        .update_user(&actor, UpdateUserCommand::default())
        .await
        .unwrap();
    assert_eq!(user.username, "jake");
    assert!(!user.token.is_empty());
}

#[tokio::test]
async fn profile_lookup_and_missing_profile() {
    use conduit_core::application::queries::profiles::GetProfileQuery;

    let app = support::test_app();
    app.register("jake").await;

    let profile = app
        .services
        .profile_queries
        .get_profile(None, GetProfileQuery { username: "jake".into() })
        .await
        .unwrap();
    assert_eq!(profile.username, "jake");
    assert!(!profile.following);

    let err = app
        .services
        .profile_queries
        .get_profile(None, GetProfileQuery { username: "ghost".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(Entity::Profile)));
}
