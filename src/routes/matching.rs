use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{assemble, move_member, Matcher, MatchingError, MoveSpec};
use crate::models::{
    DeleteResultResponse, ErrorResponse, Gender, HealthResponse, MoveMemberRequest,
    MoveMemberResponse, Room, RunMatchingRequest,
};
use crate::services::MatchStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MatchStore>,
    pub matcher: Matcher,
}

/// Configure all matching-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matching/run", web::post().to(run_matching))
        .route("/matching/results/{form_id}", web::get().to(get_result))
        .route("/matching/results/{form_id}", web::delete().to(delete_result))
        .route("/matching/move", web::post().to(move_room_member));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Run matching for a survey
///
/// POST /api/v1/matching/run
///
/// Loads the completed submissions and the invitation roster for the survey,
/// runs the pairing algorithm per gender group, and stores the assembled
/// result, replacing any prior result for the same survey.
async fn run_matching(
    state: web::Data<AppState>,
    req: web::Json<RunMatchingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let form_id = &req.form_id;
    let run_id = uuid::Uuid::new_v4();
    tracing::info!("Running matching for survey {} (run {})", form_id, run_id);

    let submissions = match state.store.fetch_submissions(form_id).await {
        Ok(submissions) => submissions,
        Err(e) => {
            tracing::error!("Failed to fetch submissions for {}: {}", form_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch submissions".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    // Collaborator-level precondition: pairing needs at least two completions.
    if submissions.len() < 2 {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Insufficient participants".to_string(),
            message: format!(
                "matching requires at least 2 completed submissions, survey {} has {}",
                form_id,
                submissions.len()
            ),
            status_code: 400,
        });
    }

    let total_participants = match state.store.count_participants(form_id).await {
        Ok(total) => total,
        Err(e) => {
            tracing::error!("Failed to count participants for {}: {}", form_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to count participants".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let outcome = match state.matcher.run(&submissions) {
        Ok(outcome) => outcome,
        Err(e @ MatchingError::InvalidGender { .. }) => {
            // Data-integrity class: the whole run fails rather than undercounting
            // a gender group.
            tracing::error!("Matching failed for {}: {}", form_id, e);
            return HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "Invalid gender".to_string(),
                message: e.to_string(),
                status_code: 422,
            });
        }
    };

    let result = assemble(
        form_id,
        total_participants,
        submissions.len() as u32,
        outcome.male_rooms,
        outcome.female_rooms,
    );

    if let Err(e) = state.store.save_result(&result).await {
        tracing::error!("Failed to store match result for {}: {}", form_id, e);
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to store match result".to_string(),
            message: e.to_string(),
            status_code: 500,
        });
    }

    tracing::info!(
        "Matching complete for survey {} (run {}): {} male rooms, {} female rooms",
        form_id,
        run_id,
        result.male_results.len(),
        result.female_results.len()
    );

    HttpResponse::Ok().json(result)
}

/// Fetch the stored match result for a survey
///
/// GET /api/v1/matching/results/{form_id}
async fn get_result(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let form_id = path.into_inner();

    match state.store.get_result(&form_id).await {
        Ok(Some(result)) => HttpResponse::Ok().json(result),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Result not found".to_string(),
            message: format!("no match result stored for survey {}", form_id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch match result for {}: {}", form_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch match result".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Delete the stored match result for a survey
///
/// DELETE /api/v1/matching/results/{form_id}
async fn delete_result(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let form_id = path.into_inner();

    match state.store.delete_result(&form_id).await {
        Ok(deleted) => HttpResponse::Ok().json(DeleteResultResponse { form_id, deleted }),
        Err(e) => {
            tracing::error!("Failed to delete match result for {}: {}", form_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to delete match result".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Manually move a member between room slots in a stored result
///
/// POST /api/v1/matching/move
///
/// A rejected move (cross-gender, out-of-range slot, unknown room, empty
/// source) is not an error: the response carries `moved: false` and the
/// unchanged result so the client can snap the drag back.
async fn move_room_member(
    state: web::Data<AppState>,
    req: web::Json<MoveMemberRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let mut result = match state.store.get_result(&req.form_id).await {
        Ok(Some(result)) => result,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Result not found".to_string(),
                message: format!("no match result stored for survey {}", req.form_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch match result for {}: {}", req.form_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch match result".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let spec = MoveSpec {
        source_room_id: req.source_room_id.clone(),
        source_slot: req.source_slot,
        dest_room_id: req.dest_room_id.clone(),
        dest_slot: req.dest_slot,
    };

    // The editor works on one flat snapshot; gender separation is enforced by
    // the room-id prefixes, so combining both groups here is safe.
    let mut rooms: Vec<Room> = result
        .male_results
        .drain(..)
        .chain(result.female_results.drain(..))
        .collect();

    let outcome = move_member(&mut rooms, &spec);

    for room in rooms {
        match room.gender() {
            Some(Gender::Male) => result.male_results.push(room),
            _ => result.female_results.push(room),
        }
    }

    if outcome.applied() {
        if let Err(e) = state.store.save_result(&result).await {
            tracing::error!("Failed to store edited result for {}: {}", req.form_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to store match result".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
        tracing::info!(
            "Applied move in survey {}: {}[{}] -> {}[{}] ({})",
            req.form_id,
            req.source_room_id,
            req.source_slot,
            req.dest_room_id,
            req.dest_slot,
            outcome.as_str()
        );
    } else {
        tracing::debug!(
            "Rejected move in survey {}: {}[{}] -> {}[{}]",
            req.form_id,
            req.source_room_id,
            req.source_slot,
            req.dest_room_id,
            req.dest_slot
        );
    }

    HttpResponse::Ok().json(MoveMemberResponse {
        moved: outcome.applied(),
        outcome: outcome.as_str().to_string(),
        result,
    })
}
