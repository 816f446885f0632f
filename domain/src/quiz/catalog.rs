//! The fixed question catalog
//!
//! Twelve questions, one per [`Category`], in the order they are asked.
//! Labels are shown to the user; values are what end up in the prompt.

use super::category::Category;
use super::question::{AnswerOption, Question};

/// Number of questions in a quiz attempt
pub const QUESTION_COUNT: usize = 12;

static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: 1,
        text: "지금 당신의 기분은 어떤가요?",
        category: Category::Mood,
        options: &[
            AnswerOption::new("설레고 들떠요", "Excited and cheerful"),
            AnswerOption::new("차분하고 평온해요", "Calm and peaceful"),
            AnswerOption::new("조금 우울하고 지쳤어요", "A little down and tired"),
            AnswerOption::new("예민하고 스트레스 받아요", "Stressed and on edge"),
        ],
    },
    Question {
        id: 2,
        text: "오늘 창밖의 날씨는?",
        category: Category::Weather,
        options: &[
            AnswerOption::new("화창하고 맑아요", "Sunny and clear"),
            AnswerOption::new("비가 추적추적 와요", "Rainy"),
            AnswerOption::new("흐리고 쌀쌀해요", "Cloudy and chilly"),
            AnswerOption::new("덥고 습해요", "Hot and humid"),
        ],
    },
    Question {
        id: 3,
        text: "지금 무엇을 하고 있나요?",
        category: Category::Situation,
        options: &[
            AnswerOption::new("일하거나 공부 중", "Working or studying"),
            AnswerOption::new("친구와 수다 중", "Chatting with friends"),
            AnswerOption::new("혼자만의 휴식", "Resting alone"),
            AnswerOption::new("이동 중", "On the move"),
        ],
    },
    Question {
        id: 4,
        text: "몸 컨디션은 어떤가요?",
        category: Category::Physical,
        options: &[
            AnswerOption::new("에너지가 넘쳐요", "Full of energy"),
            AnswerOption::new("졸리고 피곤해요", "Sleepy and tired"),
            AnswerOption::new("속이 조금 불편해요", "Slightly upset stomach"),
            AnswerOption::new("그냥 평범해요", "Normal"),
        ],
    },
    Question {
        id: 5,
        text: "어떤 온도가 끌리나요?",
        category: Category::Temp,
        options: &[
            AnswerOption::new("얼음 가득 아이스", "Iced"),
            AnswerOption::new("따끈한 핫", "Hot"),
            AnswerOption::new("미지근해도 괜찮아요", "Warm, not too hot"),
        ],
    },
    Question {
        id: 6,
        text: "카페인은 얼마나 괜찮나요?",
        category: Category::Caffeine,
        options: &[
            AnswerOption::new("진하게! 샷 추가", "High caffeine, extra shot"),
            AnswerOption::new("적당히", "Regular caffeine"),
            AnswerOption::new("조금만", "Low caffeine"),
            AnswerOption::new("디카페인으로", "Decaf"),
        ],
    },
    Question {
        id: 7,
        text: "단맛은 어느 정도가 좋아요?",
        category: Category::Sweetness,
        options: &[
            AnswerOption::new("달달하게", "Sweet"),
            AnswerOption::new("살짝 단맛", "Slightly sweet"),
            AnswerOption::new("단맛 없이", "No sugar"),
        ],
    },
    Question {
        id: 8,
        text: "끌리는 풍미는?",
        category: Category::Flavor,
        options: &[
            AnswerOption::new("고소하고 묵직한", "Nutty and bold"),
            AnswerOption::new("산뜻하고 과일 같은", "Fruity and bright"),
            AnswerOption::new("초콜릿처럼 달콤쌉싸름한", "Chocolatey bittersweet"),
            AnswerOption::new("향긋한 바닐라/시럽", "Vanilla or syrup flavored"),
        ],
    },
    Question {
        id: 9,
        text: "원하는 질감은?",
        category: Category::Texture,
        options: &[
            AnswerOption::new("깔끔하고 가벼운", "Clean and light"),
            AnswerOption::new("부드러운 우유 거품", "Creamy milk foam"),
            AnswerOption::new("진하고 크리미한", "Rich and thick"),
        ],
    },
    Question {
        id: 10,
        text: "얼마나 마시고 싶나요?",
        category: Category::Volume,
        options: &[
            AnswerOption::new("한 모금 진하게", "Small and strong"),
            AnswerOption::new("적당한 한 잔", "Regular size"),
            AnswerOption::new("벤티 사이즈로 넉넉히", "Extra large"),
        ],
    },
    Question {
        id: 11,
        text: "함께 곁들이고 싶은 건?",
        category: Category::Pairing,
        options: &[
            AnswerOption::new("달콤한 디저트", "Sweet dessert"),
            AnswerOption::new("든든한 빵", "Hearty bread"),
            AnswerOption::new("커피만으로 충분해요", "Coffee only"),
        ],
    },
    Question {
        id: 12,
        text: "오늘 나의 분위기는?",
        category: Category::Vibe,
        options: &[
            AnswerOption::new("감성 가득 빈티지", "Emotional vintage"),
            AnswerOption::new("깔끔한 미니멀", "Clean minimal"),
            AnswerOption::new("힙하고 트렌디한", "Hip and trendy"),
            AnswerOption::new("포근한 코지", "Warm and cozy"),
        ],
    },
];

/// The ordered question catalog
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Question at a 0-based position, if any
pub fn question_at(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_twelve_questions() {
        assert_eq!(questions().len(), QUESTION_COUNT);
    }

    #[test]
    fn test_each_category_asked_once_in_order() {
        let categories: Vec<Category> = questions().iter().map(|q| q.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_ids_are_sequential() {
        for (i, q) in questions().iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
        }
    }

    #[test]
    fn test_every_question_has_distinct_non_empty_values() {
        for q in questions() {
            assert!(q.options.len() >= 2, "question {} has too few options", q.id);
            let values: HashSet<&str> = q.options.iter().map(|o| o.value).collect();
            assert_eq!(values.len(), q.options.len());
            assert!(q.options.iter().all(|o| !o.value.trim().is_empty()));
        }
    }

    #[test]
    fn test_question_at_out_of_range() {
        assert!(question_at(QUESTION_COUNT).is_none());
        assert_eq!(question_at(0).unwrap().category, Category::Mood);
    }
}
