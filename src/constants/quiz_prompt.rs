use once_cell::sync::Lazy;
use schemars::schema_for;

use crate::models::domain::{Lesson, QuizDraft};

pub const QUESTION_COUNT: usize = 10;
pub const OPTION_COUNT: usize = 5;

pub const QUIZ_AUDITOR_PROMPT: &str = r#"ATUE COMO UM AUDITOR TÉCNICO DA KA TECH.
Seu objetivo é criar uma prova de validação de conhecimento baseada ESTRITAMENTE no texto abaixo.

## TEXTO BASE (AULAS)

{context}

## REGRAS INEGOCIÁVEIS

1. CONHECIMENTO FECHADO: você NÃO SABE nada além do que está escrito acima. Se o texto não explica um conceito, não pergunte sobre ele.
2. RIGOR FATUAL: a resposta correta deve ser uma paráfrase fiel ou uma citação direta do texto.
3. SEM PEGADINHAS SUBJETIVAS: foque em processos, definições, números e regras citadas.
4. DISTRATORES INTELIGENTES: as alternativas erradas devem parecer corretas para quem não leu, mas estar erradas de acordo com o texto.
5. ESTRUTURA FIXA: exatamente {question_count} questões, cada uma com exatamente {option_count} alternativas e exatamente UMA alternativa com "is_correct": true.

## SAÍDA ESPERADA (JSON PURO)

Gere um único objeto JSON seguindo exatamente este esquema:
{
  "quiz_title": "Avaliação: {title}",
  "description": "Teste auditado baseado no material do curso.",
  "questions": [
    {
      "content": "Enunciado da pergunta?",
      "options": [
        { "content": "Alternativa A", "is_correct": false },
        { "content": "Alternativa B", "is_correct": false },
        { "content": "Alternativa C (Correta)", "is_correct": true },
        { "content": "Alternativa D", "is_correct": false },
        { "content": "Alternativa E", "is_correct": false }
      ]
    }
  ]
}

JSON Schema do objeto:
{schema}

Retorne SOMENTE o objeto JSON, sem markdown e sem comentários."#;

static DRAFT_SCHEMA: Lazy<String> =
    Lazy::new(|| serde_json::to_string_pretty(&schema_for!(QuizDraft)).unwrap_or_default());

/// Joins the lessons into one context block, keeping the fetch order.
pub fn build_context(lessons: &[Lesson]) -> String {
    lessons
        .iter()
        .map(|lesson| format!("--- AULA: {} ---\n{}\n", lesson.title, lesson.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_quiz_prompt(context: &str, title: &str) -> String {
    let question_count = QUESTION_COUNT.to_string();
    let option_count = OPTION_COUNT.to_string();

    fill_placeholders(
        QUIZ_AUDITOR_PROMPT,
        &[
            ("{context}", context),
            ("{question_count}", question_count.as_str()),
            ("{option_count}", option_count.as_str()),
            ("{title}", title),
            ("{schema}", DRAFT_SCHEMA.as_str()),
        ],
    )
}

/// Substitutes placeholders in one left-to-right pass. Inserted values are never rescanned.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
