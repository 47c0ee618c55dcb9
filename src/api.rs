use super::*;

#[derive(Debug, Deserialize)]
struct StoriesQuery {
  #[serde(default)]
  n: i64,
}

async fn get_stories<S: ItemSource>(
  State(stories): State<Arc<Stories<S>>>,
  Query(query): Query<StoriesQuery>,
) -> Result<Json<Vec<Story>>, Error> {
  Ok(Json(stories.top(query.n).await?))
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
  let message = if let Some(message) = payload.downcast_ref::<&str>() {
    (*message).to_string()
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message.clone()
  } else {
    "unknown panic".to_string()
  };

  error!(panic = %message, "request handler panicked");

  (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}

pub(crate) fn router<S: ItemSource + 'static>(stories: Stories<S>) -> Router {
  Router::new()
    .route("/api/Story/GetStories", get(get_stories::<S>))
    .layer(CatchPanicLayer::custom(handle_panic))
    .layer(TraceLayer::new_for_http())
    .with_state(Arc::new(stories))
}
