use crate::models::categorias::EXAMES_E_DIAGNOSTICOS;
use crate::models::record::TussRecord;

pub const EXAMES_E_DIAGNOSTICOS_TUSS: &[TussRecord] = &[
    TussRecord {
        code: "40301010",
        description: "ÁCIDO ÚRICO - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40301028",
        description: "COLESTEROL TOTAL - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40301036",
        description: "COLESTEROL (HDL) - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40301044",
        description: "COLESTEROL (LDL) - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40301052",
        description: "CREATININA - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40301060",
        description: "GLICOSE - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40301079",
        description: "HEMOGLOBINA GLICADA (A1C) - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40301087",
        description: "TRIGLICERÍDEOS - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40301095",
        description: "UREIA - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40301109",
        description: "TRANSAMINASE GLUTÂMICO-OXALACÉTICA (TGO/AST) - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40301117",
        description: "TRANSAMINASE GLUTÂMICO-PIRÚVICA (TGP/ALT) - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40302040",
        description: "HEMOGRAMA COM CONTAGEM DE PLAQUETAS OU FRAÇÕES (ERITROGRAMA, LEUCOGRAMA, PLAQUETAS)",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40302059",
        description: "COAGULOGRAMA (TEMPO DE PROTROMBINA, TTPA, TEMPO DE COAGULAÇÃO E SANGRAMENTO)",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40302067",
        description: "VELOCIDADE DE HEMOSSEDIMENTAÇÃO (VHS)",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40303011",
        description: "TSH - HORMÔNIO TIREOESTIMULANTE - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40303020",
        description: "T4 LIVRE - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40303038",
        description: "PSA TOTAL - ANTÍGENO PROSTÁTICO ESPECÍFICO - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40303046",
        description: "BETA-HCG - GONADOTROFINA CORIÔNICA - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40304018",
        description: "EXAME DE URINA TIPO I (CARACTERES FÍSICOS, ELEMENTOS ANORMAIS E SEDIMENTOSCOPIA)",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40304026",
        description: "UROCULTURA COM ANTIBIOGRAMA",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40304034",
        description: "PARASITOLÓGICO DE FEZES",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40304042",
        description: "PESQUISA DE SANGUE OCULTO NAS FEZES",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40305014",
        description: "ANTI-HIV 1 E 2 - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40305022",
        description: "HBSAG (ANTÍGENO DE SUPERFÍCIE DA HEPATITE B) - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40305030",
        description: "ANTI-HCV - PESQUISA E/OU DOSAGEM",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40305049",
        description: "VDRL - PESQUISA DE SÍFILIS",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40306010",
        description: "CULTURA DE SECREÇÃO (QUALQUER MATERIAL) COM ANTIBIOGRAMA",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40307017",
        description: "TESTE MOLECULAR POR PCR PARA SARS-COV-2",
        cbos: "225305",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40401012",
        description: "ELETROCARDIOGRAMA CONVENCIONAL DE ATÉ 12 DERIVAÇÕES (ECG)",
        cbos: "225120",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40401020",
        description: "TESTE ERGOMÉTRICO CONVENCIONAL (INCLUI ECG BASAL)",
        cbos: "225120",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40401039",
        description: "HOLTER DE 24 HORAS (MONITORIZAÇÃO ELETROCARDIOGRÁFICA)",
        cbos: "225120",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40401047",
        description: "MAPA - MONITORIZAÇÃO AMBULATORIAL DA PRESSÃO ARTERIAL (24 HORAS)",
        cbos: "225120",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40401055",
        description: "ECOCARDIOGRAMA TRANSTORÁCICO COM DOPPLER COLORIDO",
        cbos: "225120",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40401063",
        description: "ECOCARDIOGRAMA TRANSESOFÁGICO",
        cbos: "225120",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40402019",
        description: "ELETROENCEFALOGRAMA EM VIGÍLIA OU SONO (EEG)",
        cbos: "225112",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40402027",
        description: "ELETRONEUROMIOGRAFIA DE MEMBROS SUPERIORES OU INFERIORES",
        cbos: "225112",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40402035",
        description: "POLISSONOGRAFIA DE NOITE INTEIRA",
        cbos: "225112",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40403015",
        description: "ESPIROMETRIA (PROVA DE FUNÇÃO PULMONAR)",
        cbos: "225127",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40404011",
        description: "AUDIOMETRIA TONAL LIMIAR",
        cbos: "223810",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40404020",
        description: "IMPEDANCIOMETRIA",
        cbos: "223810",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40405018",
        description: "CAMPIMETRIA COMPUTADORIZADA (POR OLHO)",
        cbos: "225265",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40405026",
        description: "MAPEAMENTO DE RETINA (POR OLHO)",
        cbos: "225265",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40405034",
        description: "TONOMETRIA (POR OLHO)",
        cbos: "225265",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40405042",
        description: "TOMOGRAFIA DE COERÊNCIA ÓPTICA (OCT) - POR OLHO",
        cbos: "225265",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40501010",
        description: "ENDOSCOPIA DIGESTIVA ALTA COM OU SEM BIÓPSIA",
        cbos: "225112",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40501029",
        description: "COLONOSCOPIA COM OU SEM BIÓPSIA",
        cbos: "225215",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40501037",
        description: "RETOSSIGMOIDOSCOPIA FLEXÍVEL",
        cbos: "225215",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40501045",
        description: "BRONCOSCOPIA COM OU SEM BIÓPSIA",
        cbos: "225127",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40501053",
        description: "CISTOSCOPIA",
        cbos: "225285",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40501061",
        description: "COLPOSCOPIA",
        cbos: "225250",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40601013",
        description: "RADIOGRAFIA DE TÓRAX (PA E PERFIL)",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40601021",
        description: "RADIOGRAFIA DE COLUNA LOMBOSSACRA",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40601030",
        description: "RADIOGRAFIA DE CRÂNIO",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40601048",
        description: "RADIOGRAFIA DE MEMBROS (POR SEGMENTO)",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40601056",
        description: "MAMOGRAFIA BILATERAL",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40601064",
        description: "DENSITOMETRIA ÓSSEA (COLUNA E FÊMUR)",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40602010",
        description: "ULTRASSONOGRAFIA DE ABDOME TOTAL",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40602028",
        description: "ULTRASSONOGRAFIA OBSTÉTRICA",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40602036",
        description: "ULTRASSONOGRAFIA OBSTÉTRICA COM DOPPLER",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40602044",
        description: "ULTRASSONOGRAFIA DE TIREOIDE",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40602052",
        description: "ULTRASSONOGRAFIA MAMÁRIA BILATERAL",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40602060",
        description: "ULTRASSONOGRAFIA TRANSVAGINAL",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40602079",
        description: "ULTRASSONOGRAFIA COM DOPPLER DE VASOS CERVICAIS (CARÓTIDAS E VERTEBRAIS)",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40603016",
        description: "TOMOGRAFIA COMPUTADORIZADA DE CRÂNIO",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40603024",
        description: "TOMOGRAFIA COMPUTADORIZADA DE TÓRAX",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40603032",
        description: "TOMOGRAFIA COMPUTADORIZADA DE ABDOME TOTAL",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40604012",
        description: "RESSONÂNCIA MAGNÉTICA DE CRÂNIO (ENCÉFALO)",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40604020",
        description: "RESSONÂNCIA MAGNÉTICA DE COLUNA LOMBAR",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40604039",
        description: "RESSONÂNCIA MAGNÉTICA DE JOELHO (UNILATERAL)",
        cbos: "225320",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40605019",
        description: "CINTILOGRAFIA ÓSSEA DE CORPO INTEIRO",
        cbos: "225310",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40605027",
        description: "CINTILOGRAFIA MIOCÁRDICA DE PERFUSÃO (REPOUSO E ESFORÇO)",
        cbos: "225310",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40605035",
        description: "PET-CT ONCOLÓGICO DE CORPO INTEIRO",
        cbos: "225310",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40701014",
        description: "EXAME CITOPATOLÓGICO CERVICOVAGINAL (PAPANICOLAOU)",
        cbos: "225315",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40701022",
        description: "EXAME ANATOMOPATOLÓGICO DE BIÓPSIA SIMPLES (POR PEÇA)",
        cbos: "225315",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40701030",
        description: "EXAME ANATOMOPATOLÓGICO DE PEÇA CIRÚRGICA COM EXAME DE CONGELAÇÃO",
        cbos: "225315",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40701049",
        description: "IMUNOISTOQUÍMICA (POR MARCADOR)",
        cbos: "225315",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40801015",
        description: "CARIÓTIPO COM BANDAS (SANGUE PERIFÉRICO)",
        cbos: "225148",
        category: EXAMES_E_DIAGNOSTICOS,
    },
    TussRecord {
        code: "40801023",
        description: "PAINEL GENÉTICO POR SEQUENCIAMENTO DE NOVA GERAÇÃO (NGS)",
        cbos: "225148",
        category: EXAMES_E_DIAGNOSTICOS,
    },
];
