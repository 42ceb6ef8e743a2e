use std::path::Path;

use anyhow::{Context, Result};
use dailp_config::inputs::InputsConfig;
use dailp_core::{IngestContext, LexicalEntry, Table};
use dailp_io::{load_stems_table, load_table, load_verb_table, verify_inputs};
use dailp_lang_cherokee::{
    AffixCategory, AuxiliaryTables, StemGloss, UchiharaConverter, VerbProcessor, process_affixes,
};

/// Every table one run reads.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub verbs: Table,
    pub auxiliary: AuxiliaryTables,
    pub pronominal_prefixes: Table,
}

/// Entries produced by the core, in upload order.
#[derive(Debug, Default)]
pub struct Processed {
    pub verbs: Vec<LexicalEntry>,
    pub pronominal_prefixes: Vec<LexicalEntry>,
}

impl Processed {
    pub fn len(&self) -> usize {
        self.verbs.len() + self.pronominal_prefixes.len()
    }
}

/// Abort if any input differs from the file the pipeline was written against.
pub fn verify(inputs: &InputsConfig) -> Result<()> {
    let expected = inputs.expected();
    verify_inputs(
        expected
            .iter()
            .map(|file| (file.path.as_path(), file.sha256.as_str())),
    )?;
    tracing::info!(dir = %inputs.dir().display(), files = expected.len(), "inputs verified");
    Ok(())
}

pub fn load(inputs: &InputsConfig) -> Result<Inputs> {
    let verbs = load_verb_table(&inputs.verb_table())?;

    let source_3 = inputs
        .source_3_tables()
        .iter()
        .map(|path| load_table(path).with_context(|| context_for(path)))
        .collect::<Result<Vec<_>>>()?;

    let stems = load_stems_table(&inputs.stems_table())?;
    let pronominal_prefixes = load_table(&inputs.pronominal_prefixes())?;

    Ok(Inputs {
        verbs,
        auxiliary: AuxiliaryTables {
            source_3,
            stems_glosses: StemGloss::from_table(&stems),
        },
        pronominal_prefixes,
    })
}

fn context_for(path: &Path) -> String {
    format!("Failed to load {}", path.display())
}

/// Run the verb and affix processing over loaded tables.
///
/// Fails only when the verb table lacks a column the paradigm needs.
pub fn process(inputs: &Inputs, ctx: &mut IngestContext) -> Result<Processed> {
    let converter = UchiharaConverter::new();
    let processor = VerbProcessor::new(&inputs.auxiliary, &converter);
    processor
        .paradigm()
        .validate(processor.forms(), &inputs.verbs)
        .context("Verb table does not fit the paradigm")?;

    let verbs = processor.process(&inputs.verbs.rows, ctx);
    let pronominal_prefixes = process_affixes(
        &inputs.pronominal_prefixes.rows,
        AffixCategory::PronominalPrefix,
        ctx,
    );

    tracing::info!(
        verbs = verbs.len(),
        pronominal_prefixes = pronominal_prefixes.len(),
        diagnostics = ctx.diagnostics.len(),
        "processing finished"
    );
    Ok(Processed {
        verbs,
        pronominal_prefixes,
    })
}
