use rocket::{serde::json::Json, Route, State};

use crate::{
    error::{Error, Result},
    model::{
        api::{
            admin::Admin,
            auth::{AuthToken, IssuedToken},
            vote::VoteRequest,
            Message,
        },
        catalog::Catalog,
        common::{Ballot, TeacherId},
        registry::{SharedRegistry, Teacher},
    },
};

pub fn routes() -> Vec<Route> {
    routes![get_teachers, submit_vote, delete_teacher]
}

#[get("/teachers")]
async fn get_teachers(
    _token: AuthToken<Admin>,
    registry: &State<SharedRegistry>,
) -> Json<Vec<Teacher>> {
    Json(registry.lock().await.teachers().to_vec())
}

/// The caller is taken as optional so that a missing session is reported as
/// `403 Forbidden`, the same as a session belonging to someone else. A session
/// whose teacher has since been deleted gets `404 Not Found`.
#[post("/teachers/<teacher_id>/vote", data = "<request>", format = "json")]
async fn submit_vote(
    token: Option<IssuedToken<Teacher>>,
    teacher_id: TeacherId,
    request: Json<VoteRequest>,
    registry: &State<SharedRegistry>,
    catalog: &State<Catalog>,
) -> Result<Json<Message>> {
    let caller = token
        .map(|IssuedToken(token)| token.id)
        .ok_or_else(|| Error::Forbidden("Only teachers can vote".to_string()))?;
    if caller != teacher_id {
        return Err(Error::Forbidden(
            "Teachers may only vote for themselves".to_string(),
        ));
    }
    let ballot = Ballot::try_from(request.into_inner())?;

    registry
        .lock()
        .await
        .submit_vote(&caller, &teacher_id, ballot, catalog)?;
    Ok(Json(Message::new("Vote recorded")))
}

#[delete("/teachers/<teacher_id>")]
async fn delete_teacher(
    _token: AuthToken<Admin>,
    teacher_id: TeacherId,
    registry: &State<SharedRegistry>,
) -> Result<Json<Message>> {
    registry.lock().await.delete_teacher(&teacher_id)?;
    Ok(Json(Message::new("Teacher deleted")))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
        serde::json::{serde_json::json, Value},
    };

    use super::*;
    use crate::model::{
        api::vote::RawBallot,
        registry::NewTeacher,
    };

    /// The ID of the teacher the client is logged in as.
    async fn own_id(registry: &SharedRegistry) -> TeacherId {
        registry.lock().await.teachers()[0].id.clone()
    }

    async fn vote(client: &Client, teacher_id: &str, request: Value) -> Status {
        let uri = format!("/api/teachers/{teacher_id}/vote");
        let response = client
            .post(uri.as_str())
            .header(ContentType::JSON)
            .body(request.to_string())
            .dispatch()
            .await;
        response.status()
    }

    #[backend_test(teacher)]
    async fn vote_for_self(client: Client, registry: SharedRegistry) {
        let id = own_id(&registry).await;

        let status = vote(&client, &id, json!(VoteRequest::example())).await;
        assert_eq!(Status::Ok, status);
        assert_eq!(
            Some(Ballot::example()),
            registry.lock().await.teacher(&id).unwrap().vote
        );

        // Changing the vote overwrites it.
        let request = VoteRequest {
            vote: Some(RawBallot::from(Ballot::example2())),
        };
        let status = vote(&client, &id, json!(request)).await;
        assert_eq!(Status::Ok, status);
        assert_eq!(
            Some(Ballot::example2()),
            registry.lock().await.teacher(&id).unwrap().vote
        );
    }

    #[backend_test(teacher)]
    async fn vote_incomplete(client: Client, registry: SharedRegistry) {
        let id = own_id(&registry).await;
        vote(&client, &id, json!(VoteRequest::example())).await;

        let partial = json!({
            "vote": {
                "textbook1": "0202P26011",
                "textbook2": "0203P26011",
                "project1": "0212P26041",
            }
        });
        assert_eq!(Status::BadRequest, vote(&client, &id, partial).await);
        assert_eq!(Status::BadRequest, vote(&client, &id, json!({})).await);

        // The earlier vote survives.
        assert_eq!(
            Some(Ballot::example()),
            registry.lock().await.teacher(&id).unwrap().vote
        );
    }

    #[backend_test(teacher)]
    async fn vote_for_other_teacher(client: Client, registry: SharedRegistry) {
        let other = registry
            .lock()
            .await
            .login_or_register(NewTeacher::example2())
            .id
            .clone();

        let status = vote(&client, &other, json!(VoteRequest::example())).await;
        assert_eq!(Status::Forbidden, status);
        assert_eq!(None, registry.lock().await.teacher(&other).unwrap().vote);
    }

    #[backend_test]
    async fn vote_logged_out(client: Client, registry: SharedRegistry) {
        let id = registry
            .lock()
            .await
            .login_or_register(NewTeacher::example())
            .id
            .clone();

        let status = vote(&client, &id, json!(VoteRequest::example())).await;
        assert_eq!(Status::Forbidden, status);
    }

    #[backend_test(admin)]
    async fn vote_as_admin(client: Client, registry: SharedRegistry) {
        let id = registry
            .lock()
            .await
            .login_or_register(NewTeacher::example())
            .id
            .clone();

        let status = vote(&client, &id, json!(VoteRequest::example())).await;
        assert_eq!(Status::Forbidden, status);
    }

    #[backend_test(teacher)]
    async fn vote_wrong_axis(client: Client, registry: SharedRegistry) {
        let id = own_id(&registry).await;
        let request = VoteRequest {
            vote: Some(RawBallot {
                textbook1: Some("0501P26011".into()),
                ..Ballot::example().into()
            }),
        };

        assert_eq!(Status::BadRequest, vote(&client, &id, json!(request)).await);
        assert_eq!(None, registry.lock().await.teacher(&id).unwrap().vote);
    }

    #[backend_test(teacher)]
    async fn vote_after_deletion(client: Client, registry: SharedRegistry) {
        let id = own_id(&registry).await;
        registry.lock().await.delete_teacher(&id).unwrap();

        let status = vote(&client, &id, json!(VoteRequest::example())).await;
        assert_eq!(Status::NotFound, status);
        assert!(registry.lock().await.teachers().is_empty());
    }

    #[backend_test(admin)]
    async fn list_teachers(client: Client, registry: SharedRegistry) {
        {
            let mut registry = registry.lock().await;
            registry.login_or_register(NewTeacher::example());
            registry.login_or_register(NewTeacher::example3());
        }

        let response = client.get("/api/teachers").dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let teachers: Vec<Teacher> = response.into_json().await.unwrap();
        assert_eq!(registry.lock().await.teachers(), teachers.as_slice());
    }

    #[backend_test(teacher)]
    async fn list_teachers_not_admin(client: Client) {
        let response = client.get("/api/teachers").dispatch().await;
        assert_eq!(Status::Forbidden, response.status());
    }

    #[backend_test(admin)]
    async fn delete_existing_and_missing(client: Client, registry: SharedRegistry) {
        let id = registry
            .lock()
            .await
            .login_or_register(NewTeacher::example())
            .id
            .clone();
        let uri = format!("/api/teachers/{id}");

        let response = client.delete(uri.as_str()).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        assert!(registry.lock().await.teachers().is_empty());

        let response = client.delete(uri.as_str()).dispatch().await;
        assert_eq!(Status::NotFound, response.status());
    }

    #[backend_test(teacher)]
    async fn delete_not_admin(client: Client, registry: SharedRegistry) {
        let uri = format!("/api/teachers/{}", own_id(&registry).await);

        let response = client.delete(uri.as_str()).dispatch().await;
        assert_eq!(Status::Forbidden, response.status());
        assert_eq!(1, registry.lock().await.teachers().len());
    }
}
