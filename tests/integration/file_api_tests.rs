//! File API integration tests
//!
//! Drives the upload/list/download/delete endpoints end to end and checks
//! the on-disk directory after each step.

#[cfg(test)]
mod tests {
    use crate::common::{MultipartBuilder, TestRegistry};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use filedrop::HttpServer;
    use serde_json::{Value, json};

    fn upload(form: MultipartBuilder) -> test::TestRequest {
        let content_type = form.content_type();
        test::TestRequest::post()
            .uri("/api/upload")
            .insert_header(("content-type", content_type))
            .set_payload(form.build())
    }

    fn list() -> test::TestRequest {
        test::TestRequest::get().uri("/api/files")
    }

    fn download(name: &str) -> test::TestRequest {
        test::TestRequest::get().uri(&format!("/api/download/{}", name))
    }

    fn delete(name: &str) -> test::TestRequest {
        test::TestRequest::delete().uri(&format!("/api/files/{}", name))
    }

    /// The full upload → list → download → delete → list scenario
    #[actix_web::test]
    async fn test_report_scenario() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;
        let content: Vec<u8> = (0x01u8..=0x0A).collect();

        let body: Value = test::call_and_read_body_json(
            &app,
            upload(MultipartBuilder::new().file("file", "report.pdf", &content)).to_request(),
        )
        .await;
        assert_eq!(
            body,
            json!({"message": "File uploaded successfully", "filename": "report.pdf"})
        );
        assert_eq!(fixture.files_on_disk(), vec!["report.pdf"]);

        let names: Vec<String> = test::call_and_read_body_json(&app, list().to_request()).await;
        assert_eq!(names, vec!["report.pdf"]);

        let bytes = test::call_and_read_body(&app, download("report.pdf").to_request()).await;
        assert_eq!(bytes.as_ref(), content.as_slice());

        let body: Value =
            test::call_and_read_body_json(&app, delete("report.pdf").to_request()).await;
        assert_eq!(body, json!({"message": "File deleted successfully"}));

        let names: Vec<String> = test::call_and_read_body_json(&app, list().to_request()).await;
        assert!(names.is_empty());
        assert!(fixture.files_on_disk().is_empty());
    }

    #[actix_web::test]
    async fn test_fresh_registry_lists_empty() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        let resp = test::call_service(&app, list().to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let names: Vec<String> = test::read_body_json(resp).await;
        assert!(names.is_empty());
    }

    #[actix_web::test]
    async fn test_overwrite_same_name() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        for content in [b"first".as_slice(), b"second".as_slice()] {
            let resp = test::call_service(
                &app,
                upload(MultipartBuilder::new().file("file", "a.txt", content)).to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let names: Vec<String> = test::call_and_read_body_json(&app, list().to_request()).await;
        assert_eq!(names, vec!["a.txt"]);

        let bytes = test::call_and_read_body(&app, download("a.txt").to_request()).await;
        assert_eq!(bytes.as_ref(), b"second");
    }

    #[actix_web::test]
    async fn test_only_first_file_part_is_stored() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        let form = MultipartBuilder::new()
            .text("description", "quarterly numbers")
            .file("file", "first.csv", b"1,2,3")
            .file("file", "second.csv", b"4,5,6");
        let body: Value = test::call_and_read_body_json(&app, upload(form).to_request()).await;

        assert_eq!(body["filename"], "first.csv");
        assert_eq!(fixture.files_on_disk(), vec!["first.csv"]);
    }

    #[actix_web::test]
    async fn test_upload_without_file_is_rejected_before_storage() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        let resp = test::call_service(
            &app,
            upload(MultipartBuilder::new().text("description", "no file here")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "No file uploaded");
        assert!(fixture.files_on_disk().is_empty());
    }

    #[actix_web::test]
    async fn test_upload_with_empty_filename_is_rejected() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        let resp = test::call_service(
            &app,
            upload(MultipartBuilder::new().file("file", "", b"")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(fixture.files_on_disk().is_empty());
    }

    #[actix_web::test]
    async fn test_upload_without_multipart_content_type() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/api/upload")
            .insert_header(("content-type", "application/json"))
            .set_payload("{}")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
        assert!(fixture.files_on_disk().is_empty());
    }

    #[actix_web::test]
    async fn test_delete_unknown_leaves_others() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        test::call_service(
            &app,
            upload(MultipartBuilder::new().file("file", "keep.txt", b"keep")).to_request(),
        )
        .await;

        let resp = test::call_service(&app, delete("ghost.txt").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "File not found");

        assert_eq!(fixture.files_on_disk(), vec!["keep.txt"]);
    }

    #[actix_web::test]
    async fn test_deleted_file_cannot_be_downloaded() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        test::call_service(
            &app,
            upload(MultipartBuilder::new().file("file", "tmp.log", b"log")).to_request(),
        )
        .await;
        let resp = test::call_service(&app, delete("tmp.log").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(&app, download("tmp.log").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_download_is_case_sensitive() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        test::call_service(
            &app,
            upload(MultipartBuilder::new().file("file", "Notes.TXT", b"n")).to_request(),
        )
        .await;

        let resp = test::call_service(&app, download("notes.txt").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = test::call_service(&app, download("Notes.TXT").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_files_placed_on_disk_are_listed() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        std::fs::write(fixture.dir.path().join("manual.txt"), b"copied in").unwrap();

        let names: Vec<String> = test::call_and_read_body_json(&app, list().to_request()).await;
        assert_eq!(names, vec!["manual.txt"]);
        let bytes = test::call_and_read_body(&app, download("manual.txt").to_request()).await;
        assert_eq!(bytes.as_ref(), b"copied in");
    }

    #[actix_web::test]
    async fn test_list_failure_is_500() {
        let fixture = TestRegistry::new().await;
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        std::fs::remove_dir_all(fixture.dir.path()).unwrap();

        let resp = test::call_service(&app, list().to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to read directory");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/health").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_write_failure_is_500() {
        let fixture = TestRegistry::new().await;
        std::fs::create_dir(fixture.dir.path().join("clash.txt")).unwrap();
        let app = test::init_service(HttpServer::create_app(fixture.state.clone())).await;

        let resp = test::call_service(
            &app,
            upload(MultipartBuilder::new().file("file", "clash.txt", b"x")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to upload file");
        assert_eq!(body["code"], "WRITE_FAILURE");

        assert!(fixture.dir.path().join("clash.txt").is_dir());
        let listed: Vec<String> = test::call_and_read_body_json(&app, list().to_request()).await;
        assert!(listed.is_empty());
    }
}
