use crate::models::categorias::PROCEDIMENTOS_CIRURGICOS;
use crate::models::record::TussRecord;

pub const PROCEDIMENTOS_CIRURGICOS_TUSS: &[TussRecord] = &[
    TussRecord {
        code: "30101018",
        description: "EXÉRESE DE LESÃO DE PELE COM SUTURA SIMPLES",
        cbos: "225135",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30101026",
        description: "EXÉRESE DE LESÃO DE PELE COM ENXERTO OU RETALHO",
        cbos: "225235",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30101034",
        description: "BIÓPSIA DE PELE E PARTES MOLES",
        cbos: "225135",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30101042",
        description: "DRENAGEM DE ABSCESSO DE PELE E SUBCUTÂNEO",
        cbos: "225225",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30101050",
        description: "CRIOCIRURGIA DE LESÕES CUTÂNEAS (POR SESSÃO)",
        cbos: "225135",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30101069",
        description: "ELETROCOAGULAÇÃO DE LESÕES CUTÂNEAS (POR GRUPO DE ATÉ 5 LESÕES)",
        cbos: "225135",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30102014",
        description: "EXÉRESE DE UNHA (CANTOPLASTIA)",
        cbos: "225135",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30201011",
        description: "TIREOIDECTOMIA TOTAL",
        cbos: "225210",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30201020",
        description: "TIREOIDECTOMIA PARCIAL",
        cbos: "225210",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30201038",
        description: "PARATIREOIDECTOMIA",
        cbos: "225210",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30202018",
        description: "ESVAZIAMENTO CERVICAL RADICAL",
        cbos: "225210",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30301015",
        description: "AMIGDALECTOMIA COM OU SEM ADENOIDECTOMIA",
        cbos: "225275",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30301023",
        description: "SEPTOPLASTIA",
        cbos: "225275",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30301031",
        description: "TURBINECTOMIA (POR LADO)",
        cbos: "225275",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30301040",
        description: "TIMPANOPLASTIA (POR LADO)",
        cbos: "225275",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30301058",
        description: "COLOCAÇÃO DE TUBO DE VENTILAÇÃO (POR LADO)",
        cbos: "225275",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30401010",
        description: "FACOEMULSIFICAÇÃO COM IMPLANTE DE LENTE INTRAOCULAR",
        cbos: "225265",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30401029",
        description: "CIRURGIA DE PTERÍGIO",
        cbos: "225265",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30401037",
        description: "FOTOCOAGULAÇÃO A LASER DE RETINA (POR SESSÃO)",
        cbos: "225265",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30401045",
        description: "TRABECULECTOMIA",
        cbos: "225265",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30401053",
        description: "VITRECTOMIA POSTERIOR",
        cbos: "225265",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30501012",
        description: "SAFENECTOMIA (POR MEMBRO)",
        cbos: "225245",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30501020",
        description: "ESCLEROTERAPIA DE VARIZES (POR SESSÃO)",
        cbos: "225115",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30501039",
        description: "CONFECÇÃO DE FÍSTULA ARTERIOVENOSA PARA HEMODIÁLISE",
        cbos: "225245",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30502010",
        description: "REVASCULARIZAÇÃO DO MIOCÁRDIO (QUALQUER NÚMERO DE ENXERTOS)",
        cbos: "225205",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30502029",
        description: "IMPLANTE DE MARCA-PASSO CARDÍACO DEFINITIVO",
        cbos: "225205",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30502037",
        description: "ANGIOPLASTIA CORONARIANA COM IMPLANTE DE STENT",
        cbos: "225120",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30601016",
        description: "HERNIORRAFIA INGUINAL UNILATERAL",
        cbos: "225225",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30601024",
        description: "HERNIORRAFIA UMBILICAL",
        cbos: "225225",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30601032",
        description: "HERNIORRAFIA INCISIONAL",
        cbos: "225225",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30602012",
        description: "COLECISTECTOMIA VIDEOLAPAROSCÓPICA",
        cbos: "225220",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30602020",
        description: "COLECISTECTOMIA CONVENCIONAL",
        cbos: "225220",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30602039",
        description: "APENDICECTOMIA",
        cbos: "225225",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30602047",
        description: "GASTRECTOMIA PARCIAL",
        cbos: "225220",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30602055",
        description: "GASTROPLASTIA PARA OBESIDADE MÓRBIDA (QUALQUER TÉCNICA)",
        cbos: "225220",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30602063",
        description: "COLECTOMIA PARCIAL",
        cbos: "225220",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30602071",
        description: "HEMORROIDECTOMIA",
        cbos: "225215",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30602080",
        description: "FISTULECTOMIA ANAL",
        cbos: "225215",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30701013",
        description: "NEFRECTOMIA TOTAL UNILATERAL",
        cbos: "225285",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30701021",
        description: "NEFROLITOTRIPSIA EXTRACORPÓREA (POR SESSÃO)",
        cbos: "225285",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30701030",
        description: "URETEROLITOTRIPSIA ENDOSCÓPICA",
        cbos: "225285",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30701048",
        description: "RESSECÇÃO ENDOSCÓPICA DE PRÓSTATA (RTU)",
        cbos: "225285",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30701056",
        description: "PROSTATECTOMIA RADICAL",
        cbos: "225285",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30701064",
        description: "VASECTOMIA",
        cbos: "225285",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30801010",
        description: "PARTO NORMAL",
        cbos: "225250",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30801029",
        description: "CESARIANA",
        cbos: "225250",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30801037",
        description: "CURETAGEM UTERINA (SEMIÓTICA OU PÓS-ABORTAMENTO)",
        cbos: "225250",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30801045",
        description: "HISTERECTOMIA TOTAL",
        cbos: "225250",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30801053",
        description: "LAQUEADURA TUBÁRIA",
        cbos: "225250",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30802017",
        description: "MASTECTOMIA RADICAL OU RADICAL MODIFICADA",
        cbos: "225255",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30802025",
        description: "QUADRANTECTOMIA COM ESVAZIAMENTO AXILAR",
        cbos: "225255",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30802033",
        description: "RECONSTRUÇÃO MAMÁRIA COM RETALHO MUSCULAR OU MIOCUTÂNEO",
        cbos: "225235",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30901011",
        description: "ARTROSCOPIA DE JOELHO (DIAGNÓSTICA OU CIRÚRGICA)",
        cbos: "225270",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30901020",
        description: "ARTROPLASTIA TOTAL DE QUADRIL",
        cbos: "225270",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30901038",
        description: "ARTROPLASTIA TOTAL DE JOELHO",
        cbos: "225270",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30901046",
        description: "OSTEOSSÍNTESE DE FRATURA DE FÊMUR",
        cbos: "225270",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30901054",
        description: "TRATAMENTO CIRÚRGICO DA SÍNDROME DO TÚNEL DO CARPO",
        cbos: "225270",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "30901062",
        description: "REDUÇÃO INCRUENTA DE FRATURA OU LUXAÇÃO COM IMOBILIZAÇÃO",
        cbos: "225270",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "31001017",
        description: "CRANIOTOMIA PARA TUMOR INTRACRANIANO",
        cbos: "225260",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "31001025",
        description: "MICRODISCECTOMIA LOMBAR",
        cbos: "225260",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "31001033",
        description: "DERIVAÇÃO VENTRICULOPERITONEAL",
        cbos: "225260",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "31101010",
        description: "LOBECTOMIA PULMONAR",
        cbos: "225240",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "31101029",
        description: "DRENAGEM PLEURAL FECHADA",
        cbos: "225240",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "31201012",
        description: "TRANSPLANTE RENAL (RECEPTOR)",
        cbos: "225285",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
    TussRecord {
        code: "31201020",
        description: "TRANSPLANTE DE MEDULA ÓSSEA AUTÓLOGO",
        cbos: "225185",
        category: PROCEDIMENTOS_CIRURGICOS,
    },
];
