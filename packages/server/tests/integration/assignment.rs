use serde_json::{Value, json};

use crate::common::{TestApp, routes};

/// Valid submit payload for the given team.
fn submission_body(team_id: i32, team_name: &str) -> Value {
    json!({
        "team_id": team_id,
        "team_name": team_name,
        "problem_solution_fit": 8,
        "functionality_features": 7,
        "technical_feasibility": 9,
        "innovation_creativity": 6,
        "user_experience": 8,
        "impact_value": 7,
        "presentation_demo_quality": 5,
        "team_collaboration": 9,
        "personalized_feedback": "Solid demo.",
    })
}

mod judge_listing {
    use super::*;

    #[tokio::test]
    async fn lists_judges_without_credential_fields() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();
        app.create_judge("judge1", true).await;

        let res = app.get_with_token(routes::JUDGES, &token).await;

        assert_eq!(res.status, 200);
        let first = &res.body.as_array().expect("array body")[0];
        assert_eq!(first["username"], "judge1");
        assert_eq!(first["is_active"], true);
        assert_eq!(first["password_hash"], Value::Null);
    }
}

mod assignment_flow {
    use super::*;

    #[tokio::test]
    async fn assign_marks_the_team_assigned() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();
        let team_id = app.create_team("Rustaceans", "fintech").await;
        let judge_id = app.create_judge("judge1", true).await;

        let res = app
            .post_with_token(
                routes::ASSIGN,
                &json!({ "team_id": team_id, "judge_id": judge_id }),
                &token,
            )
            .await;

        assert_eq!(res.status, 200, "assign failed: {}", res.text);
        assert_eq!(res.body["evaluation_status"], "assigned");
        assert_eq!(res.body["assigned_judge"], judge_id);
        assert_eq!(res.body["evaluation_score"], Value::Null);
    }

    #[tokio::test]
    async fn assign_404s_when_team_or_judge_is_missing() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();
        let team_id = app.create_team("Rustaceans", "fintech").await;
        let judge_id = app.create_judge("judge1", true).await;

        let no_team = app
            .post_with_token(
                routes::ASSIGN,
                &json!({ "team_id": 4242, "judge_id": judge_id }),
                &token,
            )
            .await;
        assert_eq!(no_team.status, 404);

        let no_judge = app
            .post_with_token(
                routes::ASSIGN,
                &json!({ "team_id": team_id, "judge_id": 4242 }),
                &token,
            )
            .await;
        assert_eq!(no_judge.status, 404);
        assert_eq!(no_judge.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn reassigning_overwrites_without_error() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();
        let team_id = app.create_team("Rustaceans", "fintech").await;
        let j1 = app.create_judge("judge1", true).await;
        let j2 = app.create_judge("judge2", true).await;

        app.assign(team_id, j1, &token).await;
        let res = app
            .post_with_token(
                routes::ASSIGN,
                &json!({ "team_id": team_id, "judge_id": j2 }),
                &token,
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["assigned_judge"], j2);
        assert_eq!(res.body["evaluation_status"], "assigned");
    }

    #[tokio::test]
    async fn unassign_resets_the_team_unconditionally() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();
        let team_id = app.create_team("Rustaceans", "fintech").await;
        let judge_id = app.create_judge("judge1", true).await;
        app.assign(team_id, judge_id, &token).await;

        let res = app.patch_with_token(&routes::unassign(team_id), &token).await;

        assert_eq!(res.status, 200, "unassign failed: {}", res.text);
        assert_eq!(res.body["evaluation_status"], "unassigned");
        assert_eq!(res.body["assigned_judge"], Value::Null);
        assert_eq!(res.body["evaluation_score"], Value::Null);
    }

    #[tokio::test]
    async fn unassign_is_idempotent() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();
        let team_id = app.create_team("Rustaceans", "fintech").await;

        let first = app.patch_with_token(&routes::unassign(team_id), &token).await;
        let second = app.patch_with_token(&routes::unassign(team_id), &token).await;

        assert_eq!(first.status, 200);
        assert_eq!(second.status, 200);
        assert_eq!(second.body["evaluation_status"], "unassigned");
    }

    #[tokio::test]
    async fn unassign_404s_for_unknown_team() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();

        let res = app.patch_with_token(&routes::unassign(4242), &token).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn unassign_discards_the_score_but_keeps_the_evaluation() {
        let app = TestApp::spawn().await;
        let admin = app.admin_token();
        let team_id = app.create_team("Rustaceans", "fintech").await;
        let judge_id = app.create_judge("judge1", true).await;
        let judge = app.judge_token(judge_id, "judge1");

        app.assign(team_id, judge_id, &admin).await;
        let submitted = app
            .post_with_token(routes::SUBMIT, &submission_body(team_id, "Rustaceans"), &judge)
            .await;
        assert_eq!(submitted.status, 200, "submit failed: {}", submitted.text);

        let res = app.patch_with_token(&routes::unassign(team_id), &admin).await;
        assert_eq!(res.body["evaluation_status"], "unassigned");
        assert_eq!(res.body["evaluation_score"], Value::Null);

        // The ledger itself is untouched.
        let own = app
            .get_with_token(&routes::own_evaluation(team_id), &judge)
            .await;
        assert_eq!(own.status, 200);
        assert_eq!(own.body["status"], "submitted");
    }
}

mod team_listing {
    use super::*;

    #[tokio::test]
    async fn lists_all_teams_with_derived_state() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();
        let assigned = app.create_team("Assigned", "ai").await;
        let unassigned = app.create_team("Unassigned", "web").await;
        let judge_id = app.create_judge("judge1", true).await;
        app.assign(assigned, judge_id, &token).await;

        let res = app.get_with_token(routes::TEAMS, &token).await;

        assert_eq!(res.status, 200);
        let teams = res.body.as_array().expect("array body");
        assert_eq!(teams.len(), 2);
        let by_id = |id: i32| {
            teams
                .iter()
                .find(|t| t["id"] == id)
                .expect("team in listing")
        };
        assert_eq!(by_id(assigned)["evaluation_status"], "assigned");
        assert_eq!(by_id(unassigned)["evaluation_status"], "unassigned");
    }

    #[tokio::test]
    async fn requires_an_admin_token() {
        let app = TestApp::spawn().await;
        let judge_id = app.create_judge("judge1", true).await;
        let judge = app.judge_token(judge_id, "judge1");

        let res = app.get_with_token(routes::TEAMS, &judge).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_INVALID");
    }
}
