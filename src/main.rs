use mb_cache::{can_upload, Config};
use mb_core::{PartRef, RunSpec};
use mb_managed::{get_asset, managed_asset, MANAGED_DATASETS, MANAGED_METHODS};

fn main() {
    // CLI mínima:
    //   menpobench id --method <SPEC> --test <CSV> [--train <CSV>]
    //                 [--pre-train <CSV>] [--pre-test <CSV>] [--post-test <CSV>]
    //   menpobench retrieve (--dataset <NAME> | --method <NAME>)
    //   menpobench can-upload
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("id") => run_id(&args[2..]),
        Some("retrieve") => run_retrieve(&args[2..]),
        Some("can-upload") => run_can_upload(),
        _ => {
            eprintln!("Uso: menpobench <id|retrieve|can-upload> [opciones]");
            std::process::exit(2);
        }
    }
}

fn parse_csv(value: &str) -> Vec<PartRef> {
    value.split(',')
         .filter(|s| !s.is_empty())
         .map(PartRef::parse)
         .collect()
}

/// Resuelve la identidad de un run descrito por flags y la imprime.
fn run_id(args: &[String]) {
    let mut method: Option<PartRef> = None;
    let mut train: Option<Vec<PartRef>> = None;
    let mut test: Vec<PartRef> = Vec::new();
    let mut pre_train: Option<Vec<PartRef>> = None;
    let mut pre_test: Vec<PartRef> = Vec::new();
    let mut post_test: Vec<PartRef> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--method" => {
                i += 1;
                if i < args.len() { method = Some(PartRef::parse(&args[i])); }
            }
            "--train" => {
                i += 1;
                if i < args.len() { train = Some(parse_csv(&args[i])); }
            }
            "--test" => {
                i += 1;
                if i < args.len() { test = parse_csv(&args[i]); }
            }
            "--pre-train" => {
                i += 1;
                if i < args.len() { pre_train = Some(parse_csv(&args[i])); }
            }
            "--pre-test" => {
                i += 1;
                if i < args.len() { pre_test = parse_csv(&args[i]); }
            }
            "--post-test" => {
                i += 1;
                if i < args.len() { post_test = parse_csv(&args[i]); }
            }
            _ => {}
        }
        i += 1;
    }

    let method = match method {
        Some(m) if !test.is_empty() => m,
        _ => {
            eprintln!("Uso: menpobench id --method <SPEC> --test <CSV> [--train <CSV>] \
                       [--pre-train <CSV>] [--pre-test <CSV>] [--post-test <CSV>]");
            std::process::exit(2);
        }
    };

    // --train implica fase de entrenamiento; sin él, el run es no entrenable y
    // las claves de entrenamiento se omiten de la identidad.
    let spec = match train {
        Some(train) => RunSpec::trainable(method,
                                          train,
                                          test,
                                          pre_train.unwrap_or_default(),
                                          pre_test,
                                          post_test),
        None => RunSpec::untrainable(method, test, pre_test, post_test),
    };

    match spec.identity() {
        Some(identity) => {
            println!("{}", identity.hash());
        }
        None => {
            eprintln!("[menpobench id] run no cacheable: contiene componentes ad hoc");
            std::process::exit(4);
        }
    }
}

/// Descarga, valida y desempaqueta un asset gestionado, conservando la copia.
fn run_retrieve(args: &[String]) {
    let mut dataset: Option<String> = None;
    let mut method: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--dataset" => {
                i += 1;
                if i < args.len() { dataset = Some(args[i].clone()); }
            }
            "--method" => {
                i += 1;
                if i < args.len() { method = Some(args[i].clone()); }
            }
            _ => {}
        }
        i += 1;
    }

    let (set, name) = match (&dataset, &method) {
        (Some(name), None) => (&*MANAGED_DATASETS, name),
        (None, Some(name)) => (&*MANAGED_METHODS, name),
        _ => {
            eprintln!("Uso: menpobench retrieve (--dataset <NAME> | --method <NAME>)");
            std::process::exit(2);
        }
    };

    let dirs = match Config::from_env().resolve_cache_dir() {
        Ok(dirs) => dirs,
        Err(err) => {
            eprintln!("[menpobench retrieve] {err}");
            std::process::exit(4);
        }
    };
    let asset = match get_asset(set, name) {
        Ok(asset) => asset,
        Err(err) => {
            eprintln!("[menpobench retrieve] {err}");
            std::process::exit(4);
        }
    };
    match managed_asset(&dirs, asset) {
        Ok(unpacked) => {
            println!("{}", unpacked.keep().display());
        }
        Err(err) => {
            eprintln!("[menpobench retrieve] {err}");
            std::process::exit(5);
        }
    }
}

/// Reporta si el entorno tiene el par de credenciales completo para publicar.
fn run_can_upload() {
    if can_upload(&Config::from_env()) {
        println!("yes");
    } else {
        println!("no");
        std::process::exit(1);
    }
}
