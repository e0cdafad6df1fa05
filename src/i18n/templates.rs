//! Default validation message templates per locale.
//!
//! Each `register_*` function binds its locale's templates into the shared
//! [`ValidationEngine`]. Templates are added without override, so running a
//! registration twice against the same translator fails with a conflict.

use crate::i18n::error::RegistrationError;
use crate::i18n::validation::{Translator, ValidationEngine};

/// Binds one locale's validation templates.
pub type RegisterFn = fn(&ValidationEngine, &Translator) -> Result<(), RegistrationError>;

const EN: &[(&str, &str)] = &[
    ("required", "{0} is a required field"),
    ("email", "{0} must be a valid email address"),
    ("min", "{0} must be at least {1} in length"),
    ("max", "{0} must be a maximum of {1} in length"),
    ("len", "{0} must be {1} in length"),
    ("url", "{0} must be a valid URL"),
    ("uuid", "{0} must be a valid UUID"),
    ("oneof", "{0} must be one of [{1}]"),
];

const RU: &[(&str, &str)] = &[
    ("required", "{0} обязательное поле"),
    ("email", "{0} должен быть email адресом"),
    ("min", "{0} должен содержать минимум {1}"),
    ("max", "{0} должен содержать максимум {1}"),
    ("len", "{0} должен быть длиной в {1}"),
    ("url", "{0} должен быть URL"),
    ("uuid", "{0} должен быть UUID"),
    ("oneof", "{0} должен быть одним из [{1}]"),
];

const ZH: &[(&str, &str)] = &[
    ("required", "{0}为必填字段"),
    ("email", "{0}必须是一个有效的邮箱"),
    ("min", "{0}长度必须至少为{1}"),
    ("max", "{0}长度不能超过{1}"),
    ("len", "{0}长度必须是{1}"),
    ("url", "{0}必须是一个有效的URL"),
    ("uuid", "{0}必须是一个有效的UUID"),
    ("oneof", "{0}必须是[{1}]中的一个"),
];

const PT_BR: &[(&str, &str)] = &[
    ("required", "{0} é um campo obrigatório"),
    ("email", "{0} deve ser um endereço de e-mail válido"),
    ("min", "{0} deve ter pelo menos {1}"),
    ("max", "{0} deve ter no máximo {1}"),
    ("len", "{0} deve ter {1}"),
    ("url", "{0} deve ser uma URL válida"),
    ("uuid", "{0} deve ser um UUID válido"),
    ("oneof", "{0} deve ser um de [{1}]"),
];

fn register_all(
    engine: &ValidationEngine,
    translator: &Translator,
    templates: &[(&str, &str)],
) -> Result<(), RegistrationError> {
    for (tag, text) in templates {
        engine.register_translation(tag, translator, text, false)?;
    }
    Ok(())
}

pub fn register_en(
    engine: &ValidationEngine,
    translator: &Translator,
) -> Result<(), RegistrationError> {
    register_all(engine, translator, EN)
}

pub fn register_ru(
    engine: &ValidationEngine,
    translator: &Translator,
) -> Result<(), RegistrationError> {
    register_all(engine, translator, RU)
}

pub fn register_zh(
    engine: &ValidationEngine,
    translator: &Translator,
) -> Result<(), RegistrationError> {
    register_all(engine, translator, ZH)
}

pub fn register_pt_br(
    engine: &ValidationEngine,
    translator: &Translator,
) -> Result<(), RegistrationError> {
    register_all(engine, translator, PT_BR)
}

/// Locale code to registration function. Uzbek has no validation templates.
pub fn default_table() -> Vec<(&'static str, RegisterFn)> {
    vec![
        ("en", register_en as RegisterFn),
        ("ru", register_ru as RegisterFn),
        ("zh", register_zh as RegisterFn),
        ("pt-BR", register_pt_br as RegisterFn),
    ]
}
