//! Hand-picked spot values for I_v(x).
//!
//! Reference values were taken from the functions.wolfram.com calculator
//! and cross-checked at 50 digits. Rows are `[order, argument, I_v(x)]`.

#![allow(clippy::excessive_precision)]

#[rustfmt::skip]
pub static I0_DATA: [[f64; 3]; 10] = [
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.26606587775200833559824462521471753760767031135496220680814],
    [0.0, -2.0, 2.27958530233606726743720444081153335328584110278545905407084],
    [0.0, 4.0, 11.3019219521363304963562701832171024974126165944353377060065],
    [0.0, -7.0, 168.593908510289698857326627187500840376522679234531714193194],
    [0.0, 1.0 / 1024.0, 1.00000023841859331241759166109699567801556273303717896447683],
    [0.0, 1.0 / 1048576.0, 1.00000000000022737367544324498417583090700894607432256476338],
    [0.0, -1.0, 1.26606587775200833559824462521471753760767031135496220680814],
    [0.0, 100.0, 1.07375170713107382351972085760349466128840319332527279540154e42],
    [0.0, 200.0, 2.03968717340972461954167312677945962233267573614834337894328e85],
];

#[rustfmt::skip]
pub static I1_DATA: [[f64; 3]; 10] = [
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.565159103992485027207696027609863307328899621621092009480294],
    [1.0, -2.0, -1.59063685463732906338225442499966624795447815949553664713229],
    [1.0, 4.0, 9.75946515370444990947519256731268090005597033325296730692753],
    [1.0, -8.0, -399.873136782560098219083086145822754889628443904067647306574],
    [1.0, 1.0 / 1024.0, 0.000488281308207663226432087816784315537514225208473395063575150],
    [1.0, 1.0 / 1048576.0, 4.76837158203179210108624277276025646653133998635956784292029e-7],
    [1.0, -10.0, -2670.98830370125465434103196677215254914574515378753771310849],
    [1.0, 100.0, 1.06836939033816248120614576322429526544612284405623226965918e42],
    [1.0, 200.0, 2.03458154933206270342742797713906950389661161681122964159220e85],
];

#[rustfmt::skip]
pub static IN_DATA: [[f64; 3]; 10] = [
    [-2.0, 0.0, 0.0],
    [2.0, 1.0 / 1048576.0, 1.13686837721624646204093977095674566928522671779753217215467e-13],
    [5.0, 10.0, 777.188286403259959907293484802339632852674154572666041953297],
    [-5.0, 100.0, 9.47009387303558124618275555002161742321578485033007130107740e41],
    [-5.0, -1.0, -0.000271463155956971875181073905153777342383564426758143634974124],
    [10.0, 20.0, 3.54020020901952109905289138244985607057267103782948493874391e6],
    [10.0, -5.0, 0.00458004441917605126118647027872016953192323139337073320016447],
    [100.0, 9.0, 2.74306601746058997093587654668959071522869282506446891736820e-93],
    [100.0, 80.0, 4.65194832850610205318128191404145885093970505338730540776711e8],
    [-100.0, -200.0, 4.35275044972702191438729017441198257508190719030765213981307e74],
];

#[rustfmt::skip]
pub static IV_DATA: [[f64; 3]; 10] = [
    [2.25, 1.0 / 1048576.0, 2.34379212133481347189068464680335815256364262507955635911656e-15],
    [5.5, 3.125, 0.0583514045989371500460946536220735787163510569634133670181210],
    [-5.0 + 1.0 / 1024.0, 2.125, 0.0267920938009571023702933210070984416052633027166975342895062],
    [-5.5, 10.0, 597.577606961369169607937419869926705730305175364662688426534],
    [-5.5, 100.0, 9.22362906144706871737354069133813819358704200689067071415379e41],
    [-10486074.0 / 1048576.0, 1.0 / 1024.0, 1.41474005665181350367684623930576333542989766867888186478185e35],
    [-10486074.0 / 1048576.0, 50.0, 1.07153277202900671531087024688681954238311679648319534644743e20],
    [144794.0 / 1024.0, 100.0, 2066.27694757392660413922181531984160871678224178890247540320],
    [144794.0 / 1024.0, 200.0, 2.23699739472246928794922868978337381373643889659337595319774e64],
    [-144794.0 / 1024.0, 100.0, 2066.27694672763190927440969155740243346136463461655104698748],
];
