use super::Country;

/// One multiple-choice round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub correct_answer: Country,
    pub options: Vec<Country>,
}

impl Question {
    pub fn is_correct(&self, selected: &Country) -> bool {
        self.correct_answer.same_as(selected)
    }
}
