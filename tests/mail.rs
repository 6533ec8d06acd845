mod common;

use beget_client::{
    ApiError, ApiErrors, Error, ForwardMailStatus, ForwardMailbox, Mailbox, MailboxSettings,
    SpamFilterStatus,
};
use common::{OK_TRUE, mock_endpoint, test_client};
use httpmock::prelude::*;

#[tokio::test]
async fn get_mailbox_list() {
    let server = MockServer::start_async().await;
    let mock = mock_endpoint(
        &server,
        "mail/getMailboxList",
        r#"{"domain":"test.com"}"#,
        r#"{"status": "success", "answer": {"status": "success", "result": [{"mailbox": "testik", "domain": "test.com", "spam_filter_status": 1, "forward_mail_status": "no_forward"}]}}"#,
    )
    .await;
    let client = test_client(&server);

    let res = client.get_mailbox_list("test.com").await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        res,
        vec![Mailbox {
            mailbox: "testik".to_string(),
            domain: "test.com".to_string(),
            spam_filter_status: SpamFilterStatus::Enabled,
            forward_mail_status: ForwardMailStatus::NoForward,
        }]
    );
}

#[tokio::test]
async fn get_mailbox_list_keeps_unknown_statuses() {
    let server = MockServer::start_async().await;
    mock_endpoint(
        &server,
        "mail/getMailboxList",
        r#"{"domain":"test.com"}"#,
        r#"{"status": "success", "answer": {"status": "success", "result": [{"mailbox": "testik", "domain": "test.com", "spam_filter_status": 2, "forward_mail_status": "forward_copy"}]}}"#,
    )
    .await;
    let client = test_client(&server);

    let res = client.get_mailbox_list("test.com").await.unwrap();

    assert_eq!(res.len(), 1);
    assert_eq!(res[0].spam_filter_status, SpamFilterStatus::Other(2));
    assert_eq!(
        res[0].forward_mail_status,
        ForwardMailStatus::Other("forward_copy".to_string())
    );
}

#[tokio::test]
async fn change_mailbox_password() {
    let server = MockServer::start_async().await;
    let mock = mock_endpoint(
        &server,
        "mail/changeMailboxPassword",
        r#"{"domain":"test.com","mailbox":"testik","mailbox_password":"testik"}"#,
        OK_TRUE,
    )
    .await;
    let client = test_client(&server);

    let res = client
        .change_mailbox_password("test.com", "testik", "testik")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(res);
}

#[tokio::test]
async fn create_mailbox() {
    let server = MockServer::start_async().await;
    let mock = mock_endpoint(
        &server,
        "mail/createMailbox",
        r#"{"domain":"test.com","mailbox":"testik","mailbox_password":"testik"}"#,
        OK_TRUE,
    )
    .await;
    let client = test_client(&server);

    let res = client.create_mailbox("test.com", "testik", "testik").await.unwrap();

    mock.assert_async().await;
    assert!(res);
}

#[tokio::test]
async fn drop_mailbox() {
    let server = MockServer::start_async().await;
    let mock = mock_endpoint(
        &server,
        "mail/dropMailbox",
        r#"{"domain":"test.com","mailbox":"testik"}"#,
        OK_TRUE,
    )
    .await;
    let client = test_client(&server);

    let res = client.drop_mailbox("test.com", "testik").await.unwrap();

    mock.assert_async().await;
    assert!(res);
}

#[tokio::test]
async fn change_mailbox_settings() {
    let server = MockServer::start_async().await;
    let mock = mock_endpoint(
        &server,
        "mail/changeMailboxSettings",
        r#"{"domain":"test.com","mailbox":"testik","spam_filter_status":1,"spam_filter":20,"forward_mail_status":"no_forward"}"#,
        OK_TRUE,
    )
    .await;
    let client = test_client(&server);
    let settings =
        MailboxSettings::new(SpamFilterStatus::Enabled, ForwardMailStatus::NoForward).spam_filter(20);

    let res = client
        .change_mailbox_settings("test.com", "testik", settings)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(res);
}

#[tokio::test]
async fn forward_list_add_mailbox() {
    let server = MockServer::start_async().await;
    let mock = mock_endpoint(
        &server,
        "mail/forwardListAddMailbox",
        r#"{"domain":"test.com","forward_mailbox":"testik2@test.com","mailbox":"testik"}"#,
        OK_TRUE,
    )
    .await;
    let client = test_client(&server);

    let res = client
        .forward_list_add_mailbox("test.com", "testik", "testik2@test.com")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(res);
}

#[tokio::test]
async fn forward_list_delete_mailbox() {
    let server = MockServer::start_async().await;
    let mock = mock_endpoint(
        &server,
        "mail/forwardListDeleteMailbox",
        r#"{"domain":"test.com","forward_mailbox":"testik2@test.com","mailbox":"testik"}"#,
        OK_TRUE,
    )
    .await;
    let client = test_client(&server);

    let res = client
        .forward_list_delete_mailbox("test.com", "testik", "testik2@test.com")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(res);
}

#[tokio::test]
async fn forward_list_show() {
    let server = MockServer::start_async().await;
    let mock = mock_endpoint(
        &server,
        "mail/forwardListShow",
        r#"{"domain":"test.com","mailbox":"testik"}"#,
        r#"{"status": "success", "answer": {"status": "success", "result": [{"forward_mailbox": "testik2@test.com"}]}}"#,
    )
    .await;
    let client = test_client(&server);

    let res = client.forward_list_show("test.com", "testik").await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        res,
        vec![ForwardMailbox {
            forward_mailbox: "testik2@test.com".to_string()
        }]
    );
}

#[tokio::test]
async fn set_domain_mail() {
    let server = MockServer::start_async().await;
    let mock = mock_endpoint(
        &server,
        "mail/setDomainMail",
        r#"{"domain":"test.com","domain_mailbox":"testik"}"#,
        OK_TRUE,
    )
    .await;
    let client = test_client(&server);

    let res = client.set_domain_mail("test.com", "testik").await.unwrap();

    mock.assert_async().await;
    assert!(res);
}

#[tokio::test]
async fn clear_domain_mail() {
    let server = MockServer::start_async().await;
    let mock = mock_endpoint(&server, "mail/clearDomainMail", r#"{"domain":"test.com"}"#, OK_TRUE).await;
    let client = test_client(&server);

    let res = client.clear_domain_mail("test.com").await.unwrap();

    mock.assert_async().await;
    assert!(res);
}

#[tokio::test]
async fn clear_domain_mail_api_error() {
    let server = MockServer::start_async().await;
    mock_endpoint(
        &server,
        "mail/clearDomainMail",
        r#"{"domain":"test.com"}"#,
        r#"{"status": "success", "answer": {"status": "error", "errors": [{"error_code": "INVALID_DATA", "error_text": "Incorrect input data"}]}}"#,
    )
    .await;
    let client = test_client(&server);

    let err = client.clear_domain_mail("test.com").await.unwrap_err();

    let Error::Api(errors) = err else {
        panic!("expected API error, got {err:?}");
    };
    assert_eq!(
        errors,
        ApiErrors::new(vec![ApiError::new("INVALID_DATA", "Incorrect input data")])
    );
}
