#![allow(non_snake_case)]

use StudioLibrary::studio::studio::Studio;

#[actix_web::main]
async fn main() {
    Studio::run().await;
    Studio::terminate().await;
}
