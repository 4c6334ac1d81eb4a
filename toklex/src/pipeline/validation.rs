/// Validate that the pipeline is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating pipeline configuration");

    // Validate file processor integration
    crate::file_processor::init_file_processor_logging()?;

    // Validate grammar tables backing the classifier
    validate_grammar_tables()?;

    // Validate logging configuration
    crate::logging::config::validate_config()?;

    crate::log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "stages_validated" => 3,
        "file_processing" => true,
        "tokenization" => true,
        "classification" => true
    );

    Ok(())
}

/// Sanity-check the keyword and operator tables the classifier depends on
fn validate_grammar_tables() -> Result<(), String> {
    let keywords = crate::grammar::reserved_keywords();
    if keywords.is_empty() {
        return Err("Keyword table is empty".to_string());
    }
    for keyword in keywords {
        if keyword.is_empty() || !crate::grammar::is_reserved_keyword(keyword) {
            return Err(format!("Keyword table entry '{}' is inconsistent", keyword));
        }
    }

    let operators = crate::grammar::operator_symbols();
    if operators.is_empty() {
        return Err("Operator table is empty".to_string());
    }
    for operator in operators {
        if operator.is_empty() || !crate::grammar::is_operator_symbol(operator) {
            return Err(format!(
                "Operator table entry '{}' is inconsistent",
                operator
            ));
        }
    }

    crate::log_debug!("Grammar tables validated",
        "keywords" => keywords.len(),
        "operators" => operators.len());

    Ok(())
}
