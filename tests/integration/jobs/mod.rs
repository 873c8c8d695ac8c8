//! Job endpoint integration tests
//!
//! Covers the job CRUD contract:
//! - GET /jobs - search, pagination, author expansion
//! - GET /jobs/{id} - single record or null
//! - POST /jobs - creation with status default
//! - PUT /jobs/{id} - partial update
//! - PATCH /jobs/{id}/status - status-only update
//! - DELETE /jobs/{id} - unconditional delete

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use talentboard_jobs::JobStatus;
use talentboard_users::UserType;

use crate::common::{request_json, unique_marker, TestApp};

mod test_create_job {
    use super::*;

    #[tokio::test]
    async fn test_create_job_defaults_status_to_active() {
        let app = TestApp::new().await.unwrap();
        let author = app
            .create_test_user("Autora da Vaga", UserType::Headhunter)
            .await
            .unwrap();
        let marker = unique_marker("Vaga");

        let payload = json!({
            "name": marker,
            "type": "fullTime",
            "city": "Belo Horizonte",
            "department": "Data",
            "description": "Analytics engineering role.",
            "author": author.id
        });

        let (status, body) = request_json(app.router(), Method::POST, "/jobs", payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Vaga cadastrada com sucesso!"));

        let uri = format!("/jobs?search={}", marker);
        let (_, listing) = request_json(app.router(), Method::GET, &uri, json!(null)).await;
        let docs = listing["docs"].as_array().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["status"], "active");
    }

    #[tokio::test]
    async fn test_create_job_missing_required_field_is_401() {
        let app = TestApp::new().await.unwrap();

        // No description
        let payload = json!({
            "name": "Vaga Incompleta",
            "type": "intern",
            "city": "Natal",
            "department": "Suporte",
            "author": Uuid::new_v4()
        });

        let (status, _) = request_json(app.router(), Method::POST, "/jobs", payload).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

mod test_list_jobs {
    use super::*;

    #[tokio::test]
    async fn test_listing_expands_author_without_password() {
        let app = TestApp::new().await.unwrap();
        let author = app
            .create_test_user("Recrutadora", UserType::Headhunter)
            .await
            .unwrap();
        let marker = unique_marker("Expansao");
        app.create_test_job(&marker, author.id).await.unwrap();

        let uri = format!("/jobs?search={}", marker);
        let (status, body) = request_json(app.router(), Method::GET, &uri, json!(null)).await;

        assert_eq!(status, StatusCode::OK);
        let docs = body["docs"].as_array().unwrap();
        assert_eq!(docs.len(), 1);

        let expanded = &docs[0]["author"];
        assert_eq!(expanded["id"], author.id.to_string());
        assert_eq!(expanded["email"], author.email);
        assert_eq!(expanded["type"], "headhunter");
        assert!(expanded.get("password").is_none());
    }

    #[tokio::test]
    async fn test_listing_tolerates_dangling_author() {
        let app = TestApp::new().await.unwrap();
        let marker = unique_marker("Orfa");
        // Author id that no user row backs
        app.create_test_job(&marker, Uuid::new_v4()).await.unwrap();

        let uri = format!("/jobs?search={}", marker);
        let (status, body) = request_json(app.router(), Method::GET, &uri, json!(null)).await;

        assert_eq!(status, StatusCode::OK);
        let docs = body["docs"].as_array().unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs[0]["author"].is_null());
    }

    #[tokio::test]
    async fn test_search_filters_case_insensitively() {
        let app = TestApp::new().await.unwrap();
        let author = app
            .create_test_user("Autor Filtro", UserType::Headhunter)
            .await
            .unwrap();
        let marker = unique_marker("Filtro");
        app.create_test_job(&format!("{} Alvo", marker), author.id)
            .await
            .unwrap();
        app.create_test_job("Outra Vaga", author.id).await.unwrap();

        let uri = format!("/jobs?search={}", marker.to_uppercase());
        let (status, body) = request_json(app.router(), Method::GET, &uri, json!(null)).await;

        assert_eq!(status, StatusCode::OK);
        let docs = body["docs"].as_array().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(body["totalDocs"], 1);
    }
}

mod test_get_job {
    use super::*;

    #[tokio::test]
    async fn test_get_job_returns_record_without_author_expansion() {
        let app = TestApp::new().await.unwrap();
        let author = app
            .create_test_user("Autor Consulta", UserType::Headhunter)
            .await
            .unwrap();
        let job = app
            .create_test_job("Vaga Consulta", author.id)
            .await
            .unwrap();

        let uri = format!("/jobs/{}", job.id);
        let (status, body) = request_json(app.router(), Method::GET, &uri, json!(null)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], job.id.to_string());
        // Author stays a plain reference on the single-record endpoint
        assert_eq!(body["author"], author.id.to_string());
        assert_eq!(body["type"], "fullTime");
    }

    #[tokio::test]
    async fn test_get_unknown_job_returns_null() {
        let app = TestApp::new().await.unwrap();

        let uri = format!("/jobs/{}", Uuid::new_v4());
        let (status, body) = request_json(app.router(), Method::GET, &uri, json!(null)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null());
    }
}

mod test_update_job {
    use super::*;

    #[tokio::test]
    async fn test_partial_update_is_accepted() {
        let app = TestApp::new().await.unwrap();
        let author = app
            .create_test_user("Autor Parcial", UserType::Headhunter)
            .await
            .unwrap();
        let job = app.create_test_job("Vaga Parcial", author.id).await.unwrap();

        let uri = format!("/jobs/{}", job.id);
        let (status, body) = request_json(
            app.router(),
            Method::PUT,
            &uri,
            json!({"city": "Fortaleza"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Vaga atualizada com sucesso!"));

        let stored = app.jobs.jobs.find(job.id).await.unwrap().unwrap();
        assert_eq!(stored.city, "Fortaleza");
        assert_eq!(stored.name, job.name);
        assert_eq!(stored.description, job.description);
    }

    #[tokio::test]
    async fn test_update_unknown_id_still_succeeds() {
        let app = TestApp::new().await.unwrap();

        let uri = format!("/jobs/{}", Uuid::new_v4());
        let (status, body) = request_json(
            app.router(),
            Method::PUT,
            &uri,
            json!({"name": "Vaga Fantasma"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Vaga atualizada com sucesso!"));
    }
}

mod test_update_job_status {
    use super::*;

    #[tokio::test]
    async fn test_status_endpoint_flips_status_only() {
        let app = TestApp::new().await.unwrap();
        let author = app
            .create_test_user("Autor Status", UserType::Headhunter)
            .await
            .unwrap();
        let job = app.create_test_job("Vaga Status", author.id).await.unwrap();

        let uri = format!("/jobs/{}/status", job.id);
        let (status, body) = request_json(
            app.router(),
            Method::PATCH,
            &uri,
            json!({"status": "inactive"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Status da vaga atualizado com sucesso!"));

        let stored = app.jobs.jobs.find(job.id).await.unwrap().unwrap();
        assert_eq!(stored.status, JobStatus::Inactive);
        assert_eq!(stored.name, job.name);
    }

    #[tokio::test]
    async fn test_status_endpoint_rejects_unknown_status() {
        let app = TestApp::new().await.unwrap();

        let uri = format!("/jobs/{}/status", Uuid::new_v4());
        let (status, _) = request_json(
            app.router(),
            Method::PATCH,
            &uri,
            json!({"status": "archived"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

mod test_delete_job {
    use super::*;

    #[tokio::test]
    async fn test_delete_removes_record() {
        let app = TestApp::new().await.unwrap();
        let author = app
            .create_test_user("Autor Remocao", UserType::Headhunter)
            .await
            .unwrap();
        let job = app.create_test_job("Vaga Remocao", author.id).await.unwrap();

        let uri = format!("/jobs/{}", job.id);
        let (status, body) = request_json(app.router(), Method::DELETE, &uri, json!(null)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Vaga deletada com sucesso!"));

        let stored = app.jobs.jobs.find(job.id).await.unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_still_succeeds() {
        let app = TestApp::new().await.unwrap();

        let uri = format!("/jobs/{}", Uuid::new_v4());
        let (status, body) = request_json(app.router(), Method::DELETE, &uri, json!(null)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Vaga deletada com sucesso!"));
    }
}
