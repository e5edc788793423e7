//! Art quests: the static quest list, completion tracking and the per-quest
//! quiz.

use crown_shared::constants::{KEY_COMPLETED_QUESTS, OPTIONS_PER_QUESTION, QUIZ_LENGTH};
use crown_shared::{Difficulty, QuestId, SortDirection};
use crown_store::SharedStore;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::events::{Notice, TITLE_CONGRATS, TITLE_CORRECT, TITLE_INCORRECT};
use crate::lifetime::ScreenLifetime;
use crate::screens::{read_or_default, write_best_effort};
use crate::seed::seed_quests;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub quiz_questions: [QuizQuestion; QUIZ_LENGTH],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    Intro,
    InProgress { index: usize, score: usize },
    Completed { score: usize },
}

impl QuizState {
    fn name(&self) -> &'static str {
        match self {
            QuizState::Intro => "intro",
            QuizState::InProgress { .. } => "in progress",
            QuizState::Completed { .. } => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnswerFeedback {
    Correct,
    Incorrect,
}

impl AnswerFeedback {
    pub fn notice(self) -> Notice {
        match self {
            AnswerFeedback::Correct => Notice::new(TITLE_CORRECT, "You got it right!"),
            AnswerFeedback::Incorrect => {
                Notice::new(TITLE_INCORRECT, "Better luck with the next one.")
            }
        }
    }
}

/// The quest detail view and its quiz. Dropped on close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    quest_id: QuestId,
    state: QuizState,
    last_feedback: Option<AnswerFeedback>,
}

impl QuizSession {
    pub fn quest_id(&self) -> &QuestId {
        &self.quest_id
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn last_feedback(&self) -> Option<AnswerFeedback> {
        self.last_feedback
    }
}

pub struct QuestsScreen {
    store: SharedStore,
    lifetime: ScreenLifetime,
    quests: Vec<Quest>,
    completed: Vec<QuestId>,
    next_direction: SortDirection,
    session: Option<QuizSession>,
}

impl QuestsScreen {
    pub fn mount(store: SharedStore, lifetime: ScreenLifetime) -> Self {
        let mut screen = Self {
            store,
            lifetime,
            quests: seed_quests(),
            completed: Vec::new(),
            next_direction: SortDirection::Ascending,
            session: None,
        };
        screen.load();
        screen
    }

    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    pub fn load(&mut self) {
        self.completed = read_or_default(&self.store, KEY_COMPLETED_QUESTS);
        debug!(count = self.completed.len(), "completed quests loaded");
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn quest(&self, id: &QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| &q.id == id)
    }

    pub fn completed(&self) -> &[QuestId] {
        &self.completed
    }

    pub fn is_completed(&self, id: &QuestId) -> bool {
        self.completed.contains(id)
    }

    /// Add `id` to the completed set. Persists only when the id is new but
    /// always acknowledges.
    pub fn complete_quest(&mut self, id: &QuestId) -> Notice {
        if !self.completed.contains(id) {
            self.completed.push(id.clone());
            write_best_effort(&self.store, KEY_COMPLETED_QUESTS, &self.completed);
            info!(quest = %id, "quest completed");
        } else {
            debug!(quest = %id, "quest already completed");
        }
        Notice::new(TITLE_CONGRATS, "You have completed this quest!")
    }

    pub fn next_sort_direction(&self) -> SortDirection {
        self.next_direction
    }

    /// Stable sort by severity, flipping the direction for the next call.
    pub fn sort_by_difficulty(&mut self) -> SortDirection {
        let direction = self.next_direction;
        self.quests
            .sort_by(|a, b| direction.apply(a.difficulty.cmp(&b.difficulty)));
        self.next_direction = direction.toggled();

        debug!(?direction, "quests sorted by difficulty");
        direction
    }

    // -- Quiz ------------------------------------------------------------------

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Open the detail view for `id` with a fresh quiz. Replaces any open one.
    pub fn open_quest(&mut self, id: &QuestId) -> Result<&QuizSession> {
        if self.quest(id).is_none() {
            return Err(ClientError::QuestNotFound(id.clone()));
        }
        let session = self.session.insert(QuizSession {
            quest_id: id.clone(),
            state: QuizState::Intro,
            last_feedback: None,
        });
        Ok(&*session)
    }

    pub fn start_quiz(&mut self) -> Result<QuizState> {
        let session = self.session.as_mut().ok_or(ClientError::NoQuestOpen)?;
        match session.state {
            QuizState::Intro => {
                session.state = QuizState::InProgress { index: 0, score: 0 };
                session.last_feedback = None;
                Ok(session.state)
            }
            other => Err(ClientError::InvalidTransition {
                state: other.name(),
                action: "start",
            }),
        }
    }

    /// The question being asked, if the quiz is in progress.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        let session = self.session.as_ref()?;
        let QuizState::InProgress { index, .. } = session.state else {
            return None;
        };
        self.quest(&session.quest_id)?.quiz_questions.get(index)
    }

    /// Score `option` against the current question and advance.
    pub fn answer(&mut self, option: &str) -> Result<AnswerFeedback> {
        let session = self.session.as_ref().ok_or(ClientError::NoQuestOpen)?;
        let QuizState::InProgress { index, score } = session.state else {
            return Err(ClientError::InvalidTransition {
                state: session.state.name(),
                action: "answer",
            });
        };
        let quest = self
            .quest(&session.quest_id)
            .ok_or_else(|| ClientError::QuestNotFound(session.quest_id.clone()))?;

        let correct = quest.quiz_questions[index].correct_answer == option;
        let total = quest.quiz_questions.len();
        let feedback = if correct {
            AnswerFeedback::Correct
        } else {
            AnswerFeedback::Incorrect
        };
        let score = score + usize::from(correct);
        let next = if index + 1 < total {
            QuizState::InProgress {
                index: index + 1,
                score,
            }
        } else {
            QuizState::Completed { score }
        };

        if let Some(session) = self.session.as_mut() {
            session.state = next;
            session.last_feedback = Some(feedback);
        }

        debug!(question = index, ?feedback, "quiz answered");
        Ok(feedback)
    }

    /// Record the quest as completed, reset the quiz and close the detail
    /// view. Only valid once the quiz is finished.
    pub fn mark_completed(&mut self) -> Result<Notice> {
        let session = self.session.as_ref().ok_or(ClientError::NoQuestOpen)?;
        let QuizState::Completed { score } = session.state else {
            return Err(ClientError::InvalidTransition {
                state: session.state.name(),
                action: "mark completed",
            });
        };
        let id = session.quest_id.clone();

        let notice = self.complete_quest(&id);
        self.session = None;

        info!(quest = %id, score, "quiz finished");
        Ok(notice)
    }

    /// Close the detail view from any state. Score and completion are left
    /// untouched.
    pub fn close_quest(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(quest = %session.quest_id, state = session.state.name(), "quest closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use crown_store::{lock, shared, KeyValueStore, KeyValueStoreExt, MemoryStore};

    use super::*;
    use crate::testing::FailingStore;

    fn mount(store: &SharedStore) -> QuestsScreen {
        QuestsScreen::mount(store.clone(), ScreenLifetime::new())
    }

    fn answers(screen: &QuestsScreen, id: &QuestId) -> Vec<String> {
        screen
            .quest(id)
            .unwrap()
            .quiz_questions
            .iter()
            .map(|q| q.correct_answer.clone())
            .collect()
    }

    #[test]
    fn five_correct_answers_complete_with_full_score() {
        let store = shared(MemoryStore::new());
        let mut screen = mount(&store);
        let id = QuestId::from("1");

        screen.open_quest(&id).unwrap();
        assert_eq!(screen.session().unwrap().state(), QuizState::Intro);
        assert_eq!(
            screen.start_quiz().unwrap(),
            QuizState::InProgress { index: 0, score: 0 }
        );

        for (i, answer) in answers(&screen, &id).iter().enumerate() {
            assert_eq!(
                screen.current_question().unwrap().correct_answer,
                *answer,
                "question {i}"
            );
            assert_eq!(screen.answer(answer).unwrap(), AnswerFeedback::Correct);
        }

        assert_eq!(
            screen.session().unwrap().state(),
            QuizState::Completed { score: QUIZ_LENGTH }
        );
        assert!(screen.current_question().is_none());
    }

    #[test]
    fn wrong_answers_still_advance() {
        let store = shared(MemoryStore::new());
        let mut screen = mount(&store);
        let id = QuestId::from("2");
        screen.open_quest(&id).unwrap();
        screen.start_quiz().unwrap();

        assert_eq!(screen.answer("1642").unwrap(), AnswerFeedback::Correct);
        assert_eq!(screen.answer("nope").unwrap(), AnswerFeedback::Incorrect);
        assert_eq!(
            screen.session().unwrap().last_feedback(),
            Some(AnswerFeedback::Incorrect)
        );
        assert_eq!(
            screen.session().unwrap().state(),
            QuizState::InProgress { index: 2, score: 1 }
        );

        for _ in 0..3 {
            screen.answer("nope").unwrap();
        }
        assert_eq!(
            screen.session().unwrap().state(),
            QuizState::Completed { score: 1 }
        );
        assert!(matches!(
            screen.answer("nope"),
            Err(ClientError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn feedback_notices() {
        assert_eq!(AnswerFeedback::Correct.notice().title, TITLE_CORRECT);
        assert_eq!(AnswerFeedback::Incorrect.notice().title, TITLE_INCORRECT);
    }

    #[test]
    fn transitions_are_guarded() {
        let store = shared(MemoryStore::new());
        let mut screen = mount(&store);

        assert!(matches!(screen.start_quiz(), Err(ClientError::NoQuestOpen)));
        assert!(matches!(
            screen.open_quest(&QuestId::from("99")),
            Err(ClientError::QuestNotFound(_))
        ));

        screen.open_quest(&QuestId::from("1")).unwrap();
        assert!(matches!(
            screen.answer("1889"),
            Err(ClientError::InvalidTransition { action: "answer", .. })
        ));
        assert!(matches!(
            screen.mark_completed(),
            Err(ClientError::InvalidTransition { .. })
        ));

        screen.start_quiz().unwrap();
        assert!(matches!(
            screen.start_quiz(),
            Err(ClientError::InvalidTransition { action: "start", .. })
        ));
    }

    #[test]
    fn mark_completed_twice_records_once() {
        let store = shared(MemoryStore::new());
        let mut screen = mount(&store);
        let id = QuestId::from("3");

        for _ in 0..2 {
            screen.open_quest(&id).unwrap();
            screen.start_quiz().unwrap();
            for answer in answers(&screen, &id) {
                screen.answer(&answer).unwrap();
            }
            let notice = screen.mark_completed().unwrap();
            assert_eq!(notice.title, TITLE_CONGRATS);
            assert!(screen.session().is_none());
        }

        let stored: Vec<QuestId> = lock(&store)
            .unwrap()
            .get_json(KEY_COMPLETED_QUESTS)
            .unwrap()
            .unwrap();
        assert_eq!(stored, vec![id.clone()]);
        assert!(mount(&store).is_completed(&id));
    }

    #[test]
    fn close_discards_progress_without_completing() {
        let store = shared(MemoryStore::new());
        let mut screen = mount(&store);
        let id = QuestId::from("1");

        screen.open_quest(&id).unwrap();
        screen.start_quiz().unwrap();
        screen.answer("1889").unwrap();
        screen.close_quest();

        assert!(screen.session().is_none());
        assert!(!screen.is_completed(&id));
        assert_eq!(lock(&store).unwrap().get(KEY_COMPLETED_QUESTS).unwrap(), None);

        let session = screen.open_quest(&id).unwrap();
        assert_eq!(session.state(), QuizState::Intro);
    }

    #[test]
    fn complete_quest_acknowledges_even_when_storage_fails() {
        let store = shared(FailingStore);
        let mut screen = mount(&store);
        let id = QuestId::from("1");

        assert_eq!(screen.complete_quest(&id).title, TITLE_CONGRATS);
        assert!(screen.is_completed(&id));
    }

    #[test]
    fn difficulty_sort_uses_severity_and_toggles() {
        let store = shared(MemoryStore::new());
        let mut screen = mount(&store);

        let order = |s: &QuestsScreen| -> Vec<Difficulty> {
            s.quests().iter().map(|q| q.difficulty).collect()
        };

        assert_eq!(screen.sort_by_difficulty(), SortDirection::Ascending);
        assert_eq!(
            order(&screen),
            vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );

        assert_eq!(screen.sort_by_difficulty(), SortDirection::Descending);
        assert_eq!(
            order(&screen),
            vec![Difficulty::Hard, Difficulty::Medium, Difficulty::Easy]
        );
        assert_eq!(screen.next_sort_direction(), SortDirection::Ascending);
    }
}
