use uuid::Uuid;
use std::path::Path;
use std::str::FromStr;
use sanitize_filename::sanitize;
use actix_multipart::Multipart;
use futures::{StreamExt, TryStreamExt};
use actix_web::{get, post, web, Scope, HttpResponse, Responder};
use crate::utils::logging::*;
use crate::utils::static_files::StaticFiles;
use crate::analysis::annotator::AnnotateError;
use crate::analysis::pipeline::{self, AnalysisError};
use crate::analysis::utils::media_format::MediaFormat;
use crate::analysis::utils::uploaded_image::UploadedImage;
use crate::analysis::vision_client::{VisionClient, VisionClientError};
use crate::web::utils::response::OperationStatus;

pub fn initialize() -> Scope {
    web::scope("/analysis")
        .service(page)
        .service(upload)
}

#[get("")]
async fn page() -> impl Responder {
    let html = StaticFiles::get("html/analysis.html").expect("File not found in static files.").data;
    HttpResponse::Ok().content_type("text/html").body(html.into_owned())
}

#[post("/upload")]
async fn upload(mut payload: Multipart, vision_client: web::Data<Option<VisionClient>>) -> impl Responder {
    let uuid = Uuid::new_v4();
    let mut uploaded_image = None;
    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let file_name = match content_disposition.get_filename() {
            Some(file_name) => sanitize(file_name),
            None => return HttpResponse::BadRequest().json(OperationStatus::new(false, Some("Invalid payload.".to_string()))),
        };
        if file_name.is_empty() {
            return HttpResponse::BadRequest().json(OperationStatus::new(false, Some("Invalid filename.".to_string())));
        }
        let file_extension = Path::new(&file_name).extension().and_then(|os_str| os_str.to_str()).unwrap_or("");
        let media_format = match MediaFormat::from_str(file_extension) {
            Ok(media_format) => media_format,
            Err(_) => return HttpResponse::BadRequest().json(OperationStatus::new(false, Some("Invalid file type or extension.".to_string()))),
        };
        let mut image_bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(data) => image_bytes.extend_from_slice(&data),
                Err(_) => return HttpResponse::InternalServerError().json(OperationStatus::new(false, None)),
            }
        }
        uploaded_image = Some(UploadedImage::new(file_name, media_format, image_bytes));
    }
    let uploaded_image = match uploaded_image {
        Some(uploaded_image) => uploaded_image,
        None => return HttpResponse::BadRequest().json(OperationStatus::new(false, Some("Invalid payload.".to_string()))),
    };
    logging_debug!("Analysis", format!("Analysis {uuid} accepted file {file_name}", file_name = uploaded_image.filename));
    match pipeline::analyze(vision_client.get_ref().as_ref(), uuid, uploaded_image).await {
        Ok(report) => {
            if report.warning.is_some() {
                logging_warning!("Analysis", format!("Analysis {uuid} completed without detected objects"));
            } else {
                logging_information!("Analysis", format!("Analysis {uuid} completed with {count} objects", count = report.objects.len()));
            }
            HttpResponse::Ok().json(report)
        },
        Err(err) => {
            logging_error!("Analysis", format!("Analysis {uuid} failed"), format!("Err: {err}"));
            error_response(err)
        },
    }
}

fn error_response(error: AnalysisError) -> HttpResponse {
    let message = error.to_string();
    match &error {
        AnalysisError::Vision(VisionClientError::ConfigurationMissing) => HttpResponse::ServiceUnavailable(),
        AnalysisError::Annotate(AnnotateError::Decode(_)) => HttpResponse::BadRequest(),
        _ => HttpResponse::InternalServerError(),
    }.json(OperationStatus::new(false, Some(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use actix_web::{test, App};
    use actix_web::http::StatusCode;
    use image::{ImageFormat, Rgb, RgbImage};

    fn png_bytes() -> Vec<u8> {
        let image = RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]));
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn multipart_body(file_name: &str, content: &[u8], boundary: &str) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"imageFile\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        ).as_bytes());
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        body
    }

    fn multipart_request(file_name: &str, content: &[u8]) -> test::TestRequest {
        let boundary = "test-boundary";
        test::TestRequest::post()
            .uri("/analysis/upload")
            .insert_header(("content-type", format!("multipart/form-data; boundary={boundary}")))
            .set_payload(multipart_body(file_name, content, boundary))
    }

    #[actix_web::test]
    async fn page_serves_html() {
        let app = test::init_service(App::new().service(initialize())).await;
        let request = test::TestRequest::get().uri("/analysis").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("content-type").unwrap(), "text/html");
    }

    #[actix_web::test]
    async fn upload_rejects_unsupported_extension() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Option::<VisionClient>::None))
                .service(initialize())
        ).await;
        let request = multipart_request("notes.txt", b"not an image").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn upload_without_credentials_is_unavailable() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Option::<VisionClient>::None))
                .service(initialize())
        ).await;
        let request = multipart_request("test.png", &png_bytes()).to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
